use std::path::PathBuf;

use autocrud_manifest::Config;

use super::{ArtifactTemplate, classes, words};
use crate::{
    artifact::ArtifactKind,
    naming::NameSet,
    php::{Class, Imports, Method, Param, PhpFile, qualify},
};

/// `PostService`, list/create/update/delete over the model.
pub struct ServiceFile<'a> {
    config: &'a Config,
    names: &'a NameSet,
}

impl<'a> ServiceFile<'a> {
    pub fn new(config: &'a Config, names: &'a NameSet) -> Self {
        Self { config, names }
    }

    fn methods(&self, model: &str, collection: &str) -> Vec<Method> {
        let var = self.names.variable.as_str();
        let singular = words(&self.names.snake);
        let plural = words(&self.names.snake_plural);

        vec![
            Method::new("list")
                .doc(format!("List all {}.", plural))
                .returns(collection)
                .body_line(format!("return {}::all();", model)),
            Method::new("create")
                .doc(format!("Create a new {}.", singular))
                .param(Param::new("array", "data"))
                .returns(model)
                .body_line(format!("return {}::create($data);", model)),
            Method::new("update")
                .doc(format!("Update the given {}.", singular))
                .param(Param::new(model, var))
                .param(Param::new("array", "data"))
                .returns(model)
                .body_lines([
                    format!("${}->update($data);", var),
                    String::new(),
                    format!("return ${};", var),
                ]),
            Method::new("delete")
                .doc(format!("Delete the given {}.", singular))
                .param(Param::new(model, var))
                .returns("void")
                .body_line(format!("${}->delete();", var)),
        ]
    }
}

impl ArtifactTemplate for ServiceFile<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Service
    }

    fn target(&self) -> PathBuf {
        self.config
            .paths
            .services
            .join(format!("{}.php", self.names.service()))
    }

    fn render(&self) -> String {
        let namespace = &self.config.namespaces.services;
        let mut imports = Imports::new(namespace);
        imports.declare(&self.names.service());
        let model = imports.add(&qualify(&self.config.namespaces.models, &self.names.model));
        let collection = imports.add(classes::COLLECTION);

        let class = self
            .methods(&model, &collection)
            .into_iter()
            .fold(Class::new(self.names.service()), Class::method);

        PhpFile::new()
            .namespace(namespace)
            .imports(imports)
            .class(class)
            .render()
    }
}
