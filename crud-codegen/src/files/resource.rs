use std::path::PathBuf;

use autocrud_manifest::Config;

use super::{ArtifactTemplate, array_return, classes};
use crate::{
    artifact::ArtifactKind,
    naming::NameSet,
    php::{Class, Imports, Method, Param, PhpFile, php_string, this_property},
    shape::ResourceShape,
};

/// `PostResource`, the JSON serialization of one model.
pub struct ResourceFile<'a> {
    config: &'a Config,
    names: &'a NameSet,
    shape: &'a ResourceShape,
}

impl<'a> ResourceFile<'a> {
    pub fn new(config: &'a Config, names: &'a NameSet, shape: &'a ResourceShape) -> Self {
        Self {
            config,
            names,
            shape,
        }
    }
}

impl ArtifactTemplate for ResourceFile<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Resource
    }

    fn target(&self) -> PathBuf {
        self.config
            .paths
            .resources
            .join(format!("{}.php", self.names.resource()))
    }

    fn render(&self) -> String {
        let namespace = &self.config.namespaces.resources;
        let mut imports = Imports::new(namespace);
        imports.declare(&self.names.resource());
        let request = imports.add(classes::REQUEST);
        let json_resource = imports.add(classes::JSON_RESOURCE);

        let entries = self
            .shape
            .iter()
            .map(|column| (php_string(column), this_property(column)));

        let to_array = Method::new("toArray")
            .doc("Transform the resource into an array.")
            .param(Param::new(request, "request"))
            .returns("array")
            .body_lines(array_return(entries));

        PhpFile::new()
            .namespace(namespace)
            .imports(imports)
            .class(
                Class::new(self.names.resource())
                    .extends(json_resource)
                    .method(to_array),
            )
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::derive_names;

    #[test]
    fn test_resource_lists_shape_in_order() {
        let config = Config::default();
        let names = derive_names("Post").unwrap();
        let shape = ResourceShape {
            columns: vec!["id".into(), "title".into()],
        };

        let file = ResourceFile::new(&config, &names, &shape);
        assert_eq!(
            file.target(),
            PathBuf::from("app/Http/Resources/PostResource.php")
        );

        let php = file.render();
        let id = php.find("'id' => $this->id,").unwrap();
        let title = php.find("'title' => $this->title,").unwrap();
        assert!(id < title);
        assert!(php.contains("use Illuminate\\Http\\Resources\\Json\\JsonResource;"));
    }

    #[test]
    fn test_columns_that_are_not_php_labels() {
        let config = Config::default();
        let names = derive_names("Post").unwrap();
        let shape = ResourceShape {
            columns: vec!["first name".into(), "2fa".into(), "x-y".into()],
        };

        let php = ResourceFile::new(&config, &names, &shape).render();
        assert!(php.contains("'first name' => $this->{'first name'},"));
        assert!(php.contains("'2fa' => $this->{'2fa'},"));
        assert!(php.contains("'x-y' => $this->{'x-y'},"));
    }

    #[test]
    fn test_model_named_like_json_resource() {
        let config = Config::default();
        let names = derive_names("Json").unwrap();

        let shape = ResourceShape {
            columns: vec!["id".into()],
        };

        let php = ResourceFile::new(&config, &names, &shape).render();
        assert!(php.contains(
            "use Illuminate\\Http\\Resources\\Json\\JsonResource as JsonJsonResource;"
        ));
        assert!(php.contains("class JsonResource extends JsonJsonResource"));
    }
}
