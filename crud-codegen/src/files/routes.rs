use std::path::PathBuf;

use autocrud_manifest::Config;

use super::{ArtifactTemplate, classes};
use crate::{
    artifact::ArtifactKind,
    naming::NameSet,
    php::{PhpFile, php_string, qualify},
};

/// The five resource routes, in registration order.
const ROUTES: &[(&str, bool, &str)] = &[
    ("get", false, "index"),
    ("post", false, "store"),
    ("get", true, "show"),
    ("put", true, "update"),
    ("delete", true, "destroy"),
];

/// `routes/api/posts.php`, the route registrations for one model.
pub struct RoutesFile<'a> {
    config: &'a Config,
    names: &'a NameSet,
}

impl<'a> RoutesFile<'a> {
    pub fn new(config: &'a Config, names: &'a NameSet) -> Self {
        Self { config, names }
    }

    fn collection_path(&self) -> String {
        format!("/{}", self.names.route)
    }

    fn member_path(&self) -> String {
        format!("/{}/{{{}}}", self.names.route, self.names.variable)
    }
}

impl ArtifactTemplate for RoutesFile<'_> {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Routes
    }

    fn target(&self) -> PathBuf {
        self.config
            .paths
            .routes
            .join(format!("{}.php", self.names.snake_plural))
    }

    fn render(&self) -> String {
        let controller = self.names.controller();

        ROUTES
            .iter()
            .fold(
                PhpFile::new()
                    .use_class(qualify(&self.config.namespaces.controllers, &controller))
                    .use_class(classes::ROUTE),
                |file, (verb, member, action)| {
                    let path = if *member {
                        self.member_path()
                    } else {
                        self.collection_path()
                    };
                    file.statement(format!(
                        "Route::{}({}, [{}::class, {}]);",
                        verb,
                        php_string(&path),
                        controller,
                        php_string(action)
                    ))
                },
            )
            .render()
    }
}
