use std::path::PathBuf;

use autocrud_manifest::Config;

use super::{ArtifactTemplate, array_return, classes};
use crate::{
    artifact::ArtifactKind,
    naming::NameSet,
    php::{Class, Method, PhpFile, php_string},
    rules::{RuleContext, RuleSet},
};

/// `StorePostRequest` / `UpdatePostRequest`, a FormRequest carrying a rule set.
pub struct FormRequestFile<'a> {
    config: &'a Config,
    names: &'a NameSet,
    rules: &'a RuleSet,
}

impl<'a> FormRequestFile<'a> {
    pub fn new(config: &'a Config, names: &'a NameSet, rules: &'a RuleSet) -> Self {
        Self {
            config,
            names,
            rules,
        }
    }

    fn class_name(&self) -> String {
        match self.rules.context {
            RuleContext::Create => self.names.store_request(),
            RuleContext::Update => self.names.update_request(),
        }
    }

    fn rules_method(&self) -> Method {
        let entries = self
            .rules
            .iter()
            .map(|(column, rule)| (php_string(column), php_string(&rule.render())));

        Method::new("rules")
            .doc("Get the validation rules that apply to the request.")
            .returns("array")
            .body_lines(array_return(entries))
    }
}

impl ArtifactTemplate for FormRequestFile<'_> {
    fn kind(&self) -> ArtifactKind {
        match self.rules.context {
            RuleContext::Create => ArtifactKind::StoreRequest,
            RuleContext::Update => ArtifactKind::UpdateRequest,
        }
    }

    fn target(&self) -> PathBuf {
        self.config
            .paths
            .requests
            .join(format!("{}.php", self.class_name()))
    }

    fn render(&self) -> String {
        let authorize = Method::new("authorize")
            .doc("Determine if the user is authorized to make this request.")
            .returns("bool")
            .body_line("return true;");

        let class = Class::new(self.class_name())
            .extends("FormRequest")
            .method(authorize)
            .method(self.rules_method());

        PhpFile::new()
            .namespace(&self.config.namespaces.requests)
            .use_class(classes::FORM_REQUEST)
            .class(class)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use autocrud_core::Column;

    use super::*;
    use crate::{classify::classify_all, naming::derive_names, rules::build_rules};

    #[test]
    fn test_store_request_target_and_rules() {
        let config = Config::default();
        let names = derive_names("Post").unwrap();
        let descriptors = classify_all(&[Column::new("id"), Column::new("title")]);
        let rules = build_rules(&descriptors, RuleContext::Create);

        let file = FormRequestFile::new(&config, &names, &rules);
        assert_eq!(file.kind(), ArtifactKind::StoreRequest);
        assert_eq!(
            file.target(),
            PathBuf::from("app/Http/Requests/StorePostRequest.php")
        );

        let php = file.render();
        assert!(php.contains("class StorePostRequest extends FormRequest"));
        assert!(php.contains("'title' => 'required|string|max:255',"));
        assert!(!php.contains("'id'"));
    }

    #[test]
    fn test_empty_rule_set_renders_empty_array() {
        let config = Config::default();
        let names = derive_names("Post").unwrap();
        let descriptors = classify_all(&[Column::new("id")]);
        let rules = build_rules(&descriptors, RuleContext::Update);

        let php = FormRequestFile::new(&config, &names, &rules).render();
        assert!(php.contains("class UpdatePostRequest extends FormRequest"));
        assert!(php.contains("        return [];\n"));
    }
}
