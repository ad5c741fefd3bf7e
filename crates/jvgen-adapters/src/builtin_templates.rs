//! Built-in template store.
//!
//! Every template under `crates/jvgen-adapters/templates/` is embedded at
//! compile time. An override directory may replace any of them: a file whose
//! path relative to the directory equals a [`TemplateId::name`] wins over the
//! embedded copy.
//!
//! # Override resolution
//!
//! 1. **`$JVGEN_TEMPLATES_DIR`**: environment variable.
//! 2. **`templates.local_path`**: from the CLI configuration file.
//!
//! Files that match no template id are skipped with a `WARN` log entry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use jvgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::JvgenResult,
};

pub const TEMPLATES_DIR_ENV: &str = "JVGEN_TEMPLATES_DIR";

macro_rules! embedded {
    ($($id:ident => $file:literal),+ $(,)?) => {
        /// Embedded text of `id`.
        pub fn builtin(id: TemplateId) -> &'static str {
            match id {
                $(TemplateId::$id => include_str!(concat!("../templates/", $file)),)+
            }
        }
    };
}

embedded! {
    ParentPom => "pom/parent.xml",
    CommonPom => "pom/common.xml",
    DomainPom => "pom/domain.xml",
    InfrastructurePom => "pom/infrastructure.xml",
    AdapterRestPom => "pom/adapter-rest.xml",
    AdapterSchedulePom => "pom/adapter-schedule.xml",
    ApplicationUserPom => "pom/application-user.xml",
    StarterPom => "pom/starter.xml",
    ApplicationModulePom => "pom/application-module.xml",
    ApplicationYml => "config/application.yml",
    ApplicationDevYml => "config/application-dev.yml",
    Readme => "project/README.md",
    GitIgnore => "project/gitignore",
    UserTableSql => "demo/V1__create_user_table.sql",
    ApplicationMain => "java/starter/Application.java",
    Result => "java/common/Result.java",
    BusinessException => "java/common/BusinessException.java",
    ErrorCode => "java/common/ErrorCode.java",
    User => "java/domain/User.java",
    UserRepository => "java/domain/UserRepository.java",
    UserDomainService => "java/domain/UserDomainService.java",
    UserCreatedEvent => "java/domain/UserCreatedEvent.java",
    UserDo => "java/infrastructure/UserDO.java",
    UserMapper => "java/infrastructure/UserMapper.java",
    UserRepositoryImpl => "java/infrastructure/UserRepositoryImpl.java",
    UserDto => "java/application/UserDTO.java",
    CreateUserCommand => "java/application/CreateUserCommand.java",
    UpdateUserCommand => "java/application/UpdateUserCommand.java",
    UserAssembler => "java/application/UserAssembler.java",
    UserService => "java/application/UserService.java",
    RegisterUserExecutor => "java/application/RegisterUserExecutor.java",
    UserEventListener => "java/application/UserEventListener.java",
    CreateUserRequest => "java/adapter/CreateUserRequest.java",
    UpdateUserRequest => "java/adapter/UpdateUserRequest.java",
    UserResponseVo => "java/adapter/UserResponseVO.java",
    UserControllerAssembler => "java/adapter/UserControllerAssembler.java",
    ResponseVoAssembler => "java/adapter/ResponseVOAssembler.java",
    LoggingFilter => "java/adapter/LoggingFilter.java",
    AuthInterceptor => "java/adapter/AuthInterceptor.java",
    WebMvcConfig => "java/adapter/WebMvcConfig.java",
    GlobalExceptionHandler => "java/adapter/GlobalExceptionHandler.java",
    UserController => "java/adapter/UserController.java",
    HealthController => "java/adapter/HealthController.java",
    ModuleService => "java/module/Service.java",
}

/// Template store backed by the embedded templates plus optional overrides.
#[derive(Debug, Clone, Default)]
pub struct BuiltinTemplates {
    overrides: HashMap<TemplateId, String>,
    source: Option<PathBuf>,
}

impl BuiltinTemplates {
    /// Embedded templates only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Embedded templates, overridden by files under `dir`.
    ///
    /// # Errors
    ///
    /// Fails if `dir` does not exist or an override file cannot be read.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn with_override_dir(dir: impl AsRef<Path>) -> JvgenResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ApplicationError::filesystem(dir, "Templates directory not found").into());
        }

        let mut overrides = HashMap::new();
        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::filesystem(dir, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(dir) else {
                continue;
            };
            let name = normalize_path(relative);

            let Some(id) = TemplateId::ALL.into_iter().find(|id| id.name() == name) else {
                warn!(file = %name, "Ignoring file that matches no template");
                continue;
            };

            let content = std::fs::read_to_string(entry.path())
                .map_err(|e| ApplicationError::filesystem(entry.path(), e))?;
            debug!(template = %id, "Override loaded");
            overrides.insert(id, content);
        }

        info!(count = overrides.len(), "Template overrides loaded");
        Ok(Self {
            overrides,
            source: Some(dir.to_path_buf()),
        })
    }

    /// Resolve the override directory from the environment first, then from
    /// `configured`; embedded templates only when neither is set.
    pub fn discover(configured: Option<&Path>) -> JvgenResult<Self> {
        if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
            debug!(path = %env_dir, "Override directory from ${}", TEMPLATES_DIR_ENV);
            return Self::with_override_dir(env_dir);
        }
        match configured {
            Some(dir) => Self::with_override_dir(dir),
            None => Ok(Self::new()),
        }
    }

    /// Directory the overrides came from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn is_overridden(&self, id: TemplateId) -> bool {
        self.overrides.contains_key(&id)
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(&self, id: TemplateId) -> JvgenResult<String> {
        Ok(self
            .overrides
            .get(&id)
            .cloned()
            .unwrap_or_else(|| builtin(id).to_string()))
    }
}

fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PomEditor;
    use jvgen_core::application::ports::DescriptorEditor;
    use jvgen_core::domain::{ModuleName, ProjectConfig, RenderContext};
    use std::fs;
    use tempfile::TempDir;

    fn full_context() -> RenderContext {
        let config = ProjectConfig::builder()
            .group_id("com.example")
            .artifact_id("demo-app")
            .build()
            .unwrap();
        RenderContext::new(&config).with_module(&ModuleName::parse("payment").unwrap())
    }

    #[test]
    fn every_builtin_renders_strictly() {
        let ctx = full_context();
        for id in TemplateId::ALL {
            let text = builtin(id);
            assert!(!text.is_empty(), "{id} is empty");
            let rendered = ctx.render_strict(id.name(), text).unwrap();
            assert!(!rendered.contains("{{"), "{id} left a token");
        }
    }

    #[test]
    fn parent_pom_carries_coordinates() {
        let rendered = full_context().render(builtin(TemplateId::ParentPom));
        assert!(rendered.contains("<groupId>com.example</groupId>"));
        assert!(rendered.contains("<artifactId>demo-app</artifactId>"));
        assert!(rendered.contains("</modules>"));
        assert!(rendered.contains("<artifactId>application-user</artifactId>"));
    }

    #[test]
    fn rendered_parent_pom_reads_back() {
        let config = ProjectConfig::builder()
            .group_id("com.acme")
            .artifact_id("store")
            .version("2.3.4")
            .project_name("R&D Store")
            .package_name("com.acme.store")
            .build()
            .unwrap();
        let pom = RenderContext::new(&config)
            .escaped_for_xml()
            .render_strict("pom/parent.xml", builtin(TemplateId::ParentPom))
            .unwrap();

        let info = PomEditor::new()
            .extract(Path::new("/store/pom.xml"), &pom)
            .unwrap();
        assert_eq!(info.group_id, "com.acme");
        assert_eq!(info.artifact_id.as_deref(), Some("store"));
        assert_eq!(info.version.as_deref(), Some("2.3.4"));
        assert_eq!(info.name.as_deref(), Some("R&D Store"));
        assert_eq!(info.package.as_deref(), Some("com.acme.store"));
    }

    #[test]
    fn overrides_win_and_unknown_files_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("project")).unwrap();
        fs::write(temp.path().join("project/README.md"), "# {{PROJECT_NAME}}").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let store = BuiltinTemplates::with_override_dir(temp.path()).unwrap();
        assert_eq!(store.get(TemplateId::Readme).unwrap(), "# {{PROJECT_NAME}}");
        assert!(store.is_overridden(TemplateId::Readme));
        assert!(!store.is_overridden(TemplateId::ParentPom));
        assert_eq!(
            store.get(TemplateId::ParentPom).unwrap(),
            builtin(TemplateId::ParentPom)
        );
        assert_eq!(store.source(), Some(temp.path()));
    }

    #[test]
    fn missing_override_dir_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(BuiltinTemplates::with_override_dir(temp.path().join("nope")).is_err());
    }
}
