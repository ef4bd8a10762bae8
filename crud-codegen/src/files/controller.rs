use std::path::PathBuf;

use autocrud_manifest::Config;

use super::{ArtifactTemplate, classes};
use crate::{
    artifact::{ArtifactKind, ControllerMode},
    naming::NameSet,
    php::{Class, Imports, Method, Param, PhpFile, qualify},
};

/// `PostController`, the five resource endpoints.
///
/// In [`ControllerMode::WithService`] every endpoint delegates to the
/// injected service; in [`ControllerMode::WithoutService`] the model is used
/// directly. The endpoints, their signatures and their responses are the
/// same in both modes.
pub struct ControllerFile<'a> {
    config: &'a Config,
    names: &'a NameSet,
    mode: ControllerMode,
}

/// How the controller body refers to each class it imports.
struct Refs {
    model: String,
    store_request: String,
    update_request: String,
    resource: String,
    service: Option<String>,
    base: String,
    collection: String,
    response: String,
}

impl<'a> ControllerFile<'a> {
    pub fn new(config: &'a Config, names: &'a NameSet, mode: ControllerMode) -> Self {
        Self {
            config,
            names,
            mode,
        }
    }

    /// Model and generated classes claim their short names first, so a
    /// clashing framework class is the one that gets aliased.
    fn resolve(&self) -> (Imports, Refs) {
        let ns = &self.config.namespaces;
        let mut imports = Imports::new(&ns.controllers);
        imports.declare(&self.names.controller());

        let model = imports.add(&qualify(&ns.models, &self.names.model));
        let store_request = imports.add(&qualify(&ns.requests, &self.names.store_request()));
        let update_request = imports.add(&qualify(&ns.requests, &self.names.update_request()));
        let resource = imports.add(&qualify(&ns.resources, &self.names.resource()));
        let service = match self.mode {
            ControllerMode::WithService => {
                Some(imports.add(&qualify(&ns.services, &self.names.service())))
            }
            ControllerMode::WithoutService => None,
        };
        let base = imports.add(&self.config.controller.base);
        let collection = imports.add(classes::RESOURCE_COLLECTION);
        let response = imports.add(classes::RESPONSE);

        let refs = Refs {
            model,
            store_request,
            update_request,
            resource,
            service,
            base,
            collection,
            response,
        };
        (imports, refs)
    }

    /// Expression reaching persistence: `Post` or `$this->postService`.
    fn service_call(&self, op: &str, args: &str) -> String {
        format!("$this->{}->{}({})", self.names.service_property(), op, args)
    }

    fn list_expr(&self, refs: &Refs) -> String {
        match self.mode {
            ControllerMode::WithService => self.service_call("list", ""),
            ControllerMode::WithoutService => format!("{}::all()", refs.model),
        }
    }

    fn create_expr(&self, refs: &Refs) -> String {
        match self.mode {
            ControllerMode::WithService => {
                self.service_call("create", "$request->validated()")
            }
            ControllerMode::WithoutService => {
                format!("{}::create($request->validated())", refs.model)
            }
        }
    }

    fn update_stmt(&self) -> String {
        let var = &self.names.variable;
        match self.mode {
            ControllerMode::WithService => format!(
                "${} = {};",
                var,
                self.service_call("update", &format!("${}, $request->validated()", var))
            ),
            ControllerMode::WithoutService => format!("${}->update($request->validated());", var),
        }
    }

    fn delete_stmt(&self) -> String {
        let var = &self.names.variable;
        match self.mode {
            ControllerMode::WithService => {
                format!("{};", self.service_call("delete", &format!("${}", var)))
            }
            ControllerMode::WithoutService => format!("${}->delete();", var),
        }
    }

    fn constructor(&self, refs: &Refs) -> Option<Method> {
        refs.service.as_ref().map(|service| {
            Method::new("__construct")
                .doc("Create a new controller instance.")
                .param(Param::new(service, self.names.service_property()).promoted("protected"))
        })
    }

    fn methods(&self, refs: &Refs) -> Vec<Method> {
        let model = refs.model.as_str();
        let var = self.names.variable.as_str();
        let resource = refs.resource.as_str();
        let wrap = format!("return new {}(${});", resource, var);

        let index = Method::new("index")
            .doc("Display a listing of the resource.")
            .returns(refs.collection.as_str())
            .body_line(format!(
                "return {}::collection({});",
                resource,
                self.list_expr(refs)
            ));

        let store = Method::new("store")
            .doc("Store a newly created resource in storage.")
            .param(Param::new(refs.store_request.as_str(), "request"))
            .returns(resource)
            .body_lines([
                format!("${} = {};", var, self.create_expr(refs)),
                String::new(),
                wrap.clone(),
            ]);

        let show = Method::new("show")
            .doc("Display the specified resource.")
            .param(Param::new(model, var))
            .returns(resource)
            .body_line(wrap.clone());

        let update = Method::new("update")
            .doc("Update the specified resource in storage.")
            .param(Param::new(refs.update_request.as_str(), "request"))
            .param(Param::new(model, var))
            .returns(resource)
            .body_lines([self.update_stmt(), String::new(), wrap]);

        let destroy = Method::new("destroy")
            .doc("Remove the specified resource from storage.")
            .param(Param::new(model, var))
            .returns(refs.response.as_str())
            .body_lines([
                self.delete_stmt(),
                String::new(),
                "return response()->noContent();".to_string(),
            ]);

        self.constructor(refs)
            .into_iter()
            .chain([index, store, show, update, destroy])
            .collect()
    }
}

impl ArtifactTemplate for ControllerFile<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Controller
    }

    fn target(&self) -> PathBuf {
        self.config
            .paths
            .controllers
            .join(format!("{}.php", self.names.controller()))
    }

    fn render(&self) -> String {
        let (imports, refs) = self.resolve();

        let class = self.methods(&refs).into_iter().fold(
            Class::new(self.names.controller()).extends(refs.base.as_str()),
            Class::method,
        );

        PhpFile::new()
            .namespace(&self.config.namespaces.controllers)
            .imports(imports)
            .class(class)
            .render()
    }
}
