use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{Blueprint, ProjectStructure, RenderContext},
    error::JvgenResult,
};

/// Render every template of `blueprint` strictly and lay the result out
/// under `root`. Values substituted into XML templates are escaped.
#[instrument(skip_all, fields(kind = ?blueprint.kind(), root = %root.display()))]
pub fn render_blueprint(
    store: &dyn TemplateStore,
    blueprint: &Blueprint,
    context: &RenderContext,
    root: &Path,
) -> JvgenResult<ProjectStructure> {
    let mut structure = ProjectStructure::new(root);

    for dir in blueprint.directories() {
        structure.add_directory(dir.clone());
    }

    let xml = context.escaped_for_xml();
    for (path, id) in blueprint.files() {
        let template = store.get(*id)?;
        let values = if id.is_xml() { &xml } else { context };
        let content = values.render_strict(id.name(), &template)?;
        debug!(template = %id, path = %path.display(), "Rendered");
        structure.add_file(path.clone(), content);
    }

    structure.validate()?;
    Ok(structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateStore;
    use crate::domain::{DomainError, ModuleName, ProjectConfig, TemplateId};
    use crate::error::JvgenError;

    fn context() -> RenderContext {
        let cfg = ProjectConfig::builder()
            .group_id("com.example")
            .artifact_id("shop")
            .build()
            .unwrap();
        RenderContext::new(&cfg)
    }

    #[test]
    fn renders_each_file() {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .returning(|id| Ok(format!("{}:{{{{ARTIFACT_ID}}}}", id.name())));

        let module = ModuleName::parse("payment").unwrap();
        let blueprint = Blueprint::module(&module, "com/example");
        let structure = render_blueprint(
            &store,
            &blueprint,
            &context().with_module(&module),
            Path::new("/p"),
        )
        .unwrap();

        assert_eq!(structure.file_count(), 2);
        let pom = structure
            .file("application/application-payment/pom.xml")
            .unwrap();
        assert_eq!(pom.content, "pom/application-module.xml:shop");
    }

    #[test]
    fn only_xml_templates_get_escaped_values() {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .returning(|_| Ok("{{PROJECT_NAME}}".into()));

        let cfg = ProjectConfig::builder()
            .group_id("com.example")
            .artifact_id("shop")
            .project_name("R&D Shop")
            .build()
            .unwrap();
        let module = ModuleName::parse("payment").unwrap();
        let structure = render_blueprint(
            &store,
            &Blueprint::module(&module, "com/example"),
            &RenderContext::new(&cfg).with_module(&module),
            Path::new("/p"),
        )
        .unwrap();

        let pom = structure
            .file("application/application-payment/pom.xml")
            .unwrap();
        assert_eq!(pom.content, "R&amp;D Shop");
        let service = structure
            .files()
            .find(|f| f.path.ends_with("PaymentService.java"))
            .unwrap();
        assert_eq!(service.content, "R&D Shop");
    }

    #[test]
    fn unresolved_tokens_fail_the_whole_render() {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|id| match id {
            TemplateId::ModuleService => Ok("{{MODULE_CLASS}}".into()),
            _ => Ok(String::new()),
        });

        let module = ModuleName::parse("payment").unwrap();
        let blueprint = Blueprint::module(&module, "com/example");
        let err = render_blueprint(&store, &blueprint, &context(), Path::new("/p")).unwrap_err();

        assert!(matches!(
            err,
            JvgenError::Domain(DomainError::UnresolvedPlaceholders { .. })
        ));
    }
}
