//! Layouts of everything jvgen writes.
//!
//! A [`Blueprint`] lists relative directories and `(relative path, template)`
//! pairs. It knows nothing about template text; the application layer
//! renders it into a [`ProjectStructure`](crate::domain::ProjectStructure).

use std::path::PathBuf;

use crate::domain::{ModuleName, TemplateId, descriptor::DESCRIPTOR_FILE};

/// Module directories and the Java packages each one starts with.
const SKELETON: &[(&str, &str, &[&str])] = &[
    (
        "common",
        "common",
        &["exception", "response", "constant", "utils", "annotation"],
    ),
    (
        "domain",
        "domain",
        &["model", "event", "repository", "service"],
    ),
    (
        "infrastructure",
        "infrastructure",
        &[
            "persistence/mapper",
            "persistence/impl",
            "cache",
            "mq",
            "gateway",
            "config",
        ],
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest",
        &[
            "controller",
            "request",
            "response",
            "assembler",
            "interceptor",
            "filter",
            "config",
            "advice",
        ],
    ),
    ("adapter/adapter-schedule", "adapter/schedule", &["job", "config"]),
    (
        "application/application-user",
        "application/user",
        &["service", "dto", "assembler", "executor", "listener"],
    ),
];

const MODULE_POMS: &[(&str, TemplateId)] = &[
    ("common", TemplateId::CommonPom),
    ("domain", TemplateId::DomainPom),
    ("infrastructure", TemplateId::InfrastructurePom),
    ("adapter/adapter-rest", TemplateId::AdapterRestPom),
    ("adapter/adapter-schedule", TemplateId::AdapterSchedulePom),
    ("application/application-user", TemplateId::ApplicationUserPom),
    ("starter", TemplateId::StarterPom),
];

/// `(module dir, package suffix, file, template)` for the user CRUD example.
const DEMO_SOURCES: &[(&str, &str, &str, TemplateId)] = &[
    (
        "common",
        "common/response",
        "Result.java",
        TemplateId::Result,
    ),
    (
        "common",
        "common/exception",
        "BusinessException.java",
        TemplateId::BusinessException,
    ),
    (
        "common",
        "common/constant",
        "ErrorCode.java",
        TemplateId::ErrorCode,
    ),
    ("domain", "domain/model", "User.java", TemplateId::User),
    (
        "domain",
        "domain/repository",
        "UserRepository.java",
        TemplateId::UserRepository,
    ),
    (
        "domain",
        "domain/service",
        "UserDomainService.java",
        TemplateId::UserDomainService,
    ),
    (
        "domain",
        "domain/event",
        "UserCreatedEvent.java",
        TemplateId::UserCreatedEvent,
    ),
    (
        "infrastructure",
        "infrastructure/persistence/dataobject",
        "UserDO.java",
        TemplateId::UserDo,
    ),
    (
        "infrastructure",
        "infrastructure/persistence/mapper",
        "UserMapper.java",
        TemplateId::UserMapper,
    ),
    (
        "infrastructure",
        "infrastructure/persistence/impl",
        "UserRepositoryImpl.java",
        TemplateId::UserRepositoryImpl,
    ),
    (
        "application/application-user",
        "application/user/dto",
        "UserDTO.java",
        TemplateId::UserDto,
    ),
    (
        "application/application-user",
        "application/user/dto",
        "CreateUserCommand.java",
        TemplateId::CreateUserCommand,
    ),
    (
        "application/application-user",
        "application/user/dto",
        "UpdateUserCommand.java",
        TemplateId::UpdateUserCommand,
    ),
    (
        "application/application-user",
        "application/user/assembler",
        "UserAssembler.java",
        TemplateId::UserAssembler,
    ),
    (
        "application/application-user",
        "application/user/service",
        "UserService.java",
        TemplateId::UserService,
    ),
    (
        "application/application-user",
        "application/user/executor",
        "RegisterUserExecutor.java",
        TemplateId::RegisterUserExecutor,
    ),
    (
        "application/application-user",
        "application/user/listener",
        "UserEventListener.java",
        TemplateId::UserEventListener,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/request",
        "CreateUserRequest.java",
        TemplateId::CreateUserRequest,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/request",
        "UpdateUserRequest.java",
        TemplateId::UpdateUserRequest,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/response",
        "UserResponseVO.java",
        TemplateId::UserResponseVo,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/assembler",
        "UserControllerAssembler.java",
        TemplateId::UserControllerAssembler,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/assembler",
        "ResponseVOAssembler.java",
        TemplateId::ResponseVoAssembler,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/filter",
        "LoggingFilter.java",
        TemplateId::LoggingFilter,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/interceptor",
        "AuthInterceptor.java",
        TemplateId::AuthInterceptor,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/config",
        "WebMvcConfig.java",
        TemplateId::WebMvcConfig,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/advice",
        "GlobalExceptionHandler.java",
        TemplateId::GlobalExceptionHandler,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/controller",
        "UserController.java",
        TemplateId::UserController,
    ),
    (
        "adapter/adapter-rest",
        "adapter/rest/controller",
        "HealthController.java",
        TemplateId::HealthController,
    ),
];

const MIGRATION_DIR: &str = "infrastructure/src/main/resources/db/migration";
const STARTER_RESOURCES: &str = "starter/src/main/resources";

/// What the user-facing operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlueprintKind {
    Project,
    Demo,
    Module,
}

/// Relative layout of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    kind: BlueprintKind,
    directories: Vec<PathBuf>,
    files: Vec<(PathBuf, TemplateId)>,
}

impl Blueprint {
    /// Full multi-module project, demo included.
    pub fn project(package_path: &str) -> Self {
        let mut directories = Vec::new();
        for (module, layer, packages) in SKELETON {
            for package in *packages {
                directories.push(main_java(module, package_path, &format!("{layer}/{package}")));
            }
            if *module == "infrastructure" {
                directories.push(PathBuf::from("infrastructure/src/main/resources/mapper"));
                directories.push(PathBuf::from(MIGRATION_DIR));
            } else {
                directories.push(PathBuf::from(format!("{module}/src/main/resources")));
            }
            directories.push(PathBuf::from(format!(
                "{module}/src/test/java/{package_path}/{layer}"
            )));
        }
        directories.push(PathBuf::from(format!("starter/src/main/java/{package_path}")));
        directories.push(PathBuf::from(STARTER_RESOURCES));
        directories.push(PathBuf::from(format!("starter/src/test/java/{package_path}")));

        let mut files = vec![(PathBuf::from(DESCRIPTOR_FILE), TemplateId::ParentPom)];
        files.extend(
            MODULE_POMS
                .iter()
                .map(|(module, id)| (PathBuf::from(format!("{module}/{DESCRIPTOR_FILE}")), *id)),
        );
        files.extend([
            (
                PathBuf::from(format!("{STARTER_RESOURCES}/application.yml")),
                TemplateId::ApplicationYml,
            ),
            (
                PathBuf::from(format!("{STARTER_RESOURCES}/application-dev.yml")),
                TemplateId::ApplicationDevYml,
            ),
            (PathBuf::from("README.md"), TemplateId::Readme),
            (PathBuf::from(".gitignore"), TemplateId::GitIgnore),
        ]);
        files.extend(demo_files(package_path));

        Self {
            kind: BlueprintKind::Project,
            directories,
            files,
        }
    }

    /// The user CRUD example, written into an existing project.
    pub fn demo(package_path: &str) -> Self {
        Self {
            kind: BlueprintKind::Demo,
            directories: Vec::new(),
            files: demo_files(package_path),
        }
    }

    /// A new `application/application-<name>` module.
    pub fn module(module: &ModuleName, package_path: &str) -> Self {
        let base = module.module_path();
        let layer = format!("application/{}", module.package_segment());

        let mut directories: Vec<PathBuf> = ["service", "dto", "assembler", "executor"]
            .iter()
            .map(|package| main_java(&base, package_path, &format!("{layer}/{package}")))
            .collect();
        directories.push(PathBuf::from(format!("{base}/src/main/resources")));
        directories.push(PathBuf::from(format!(
            "{base}/src/test/java/{package_path}/{layer}"
        )));

        let files = vec![
            (
                PathBuf::from(format!("{base}/{DESCRIPTOR_FILE}")),
                TemplateId::ApplicationModulePom,
            ),
            (
                main_java(&base, package_path, &format!("{layer}/service"))
                    .join(format!("{}Service.java", module.type_name())),
                TemplateId::ModuleService,
            ),
        ];

        Self {
            kind: BlueprintKind::Module,
            directories,
            files,
        }
    }

    pub fn kind(&self) -> BlueprintKind {
        self.kind
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn files(&self) -> &[(PathBuf, TemplateId)] {
        &self.files
    }
}

fn main_java(module: &str, package_path: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{module}/src/main/java/{package_path}/{suffix}"))
}

fn demo_files(package_path: &str) -> Vec<(PathBuf, TemplateId)> {
    let mut files: Vec<_> = DEMO_SOURCES
        .iter()
        .map(|(module, suffix, file, id)| {
            (main_java(module, package_path, suffix).join(file), *id)
        })
        .collect();
    files.push((
        PathBuf::from(format!("{MIGRATION_DIR}/V1__create_user_table.sql")),
        TemplateId::UserTableSql,
    ));
    files.push((
        PathBuf::from(format!("starter/src/main/java/{package_path}/Application.java")),
        TemplateId::ApplicationMain,
    ));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    fn has_file(bp: &Blueprint, path: &str) -> bool {
        bp.files().iter().any(|(p, _)| p == Path::new(path))
    }

    #[test]
    fn project_layout_has_every_module_descriptor() {
        let bp = Blueprint::project("com/example");
        for module in [
            "common",
            "domain",
            "infrastructure",
            "adapter/adapter-rest",
            "adapter/adapter-schedule",
            "application/application-user",
            "starter",
        ] {
            assert!(has_file(&bp, &format!("{module}/pom.xml")), "{module}");
        }
        assert!(has_file(&bp, "pom.xml"));
        assert!(has_file(&bp, ".gitignore"));
        assert!(has_file(&bp, "starter/src/main/resources/application-dev.yml"));
        assert!(has_file(
            &bp,
            "infrastructure/src/main/java/com/example/\
             infrastructure/persistence/dataobject/UserDO.java"
        ));
    }

    #[test]
    fn project_paths_are_unique() {
        let bp = Blueprint::project("com/example");
        let mut seen = HashSet::new();
        for path in bp.directories().iter().chain(bp.files().iter().map(|(p, _)| p)) {
            assert!(seen.insert(path.clone()), "duplicate {}", path.display());
        }
    }

    #[test]
    fn project_uses_every_template_but_the_module_ones() {
        let bp = Blueprint::project("com/example");
        let used: HashSet<_> = bp.files().iter().map(|(_, id)| *id).collect();
        for id in TemplateId::ALL {
            let module_only = matches!(
                id,
                TemplateId::ApplicationModulePom | TemplateId::ModuleService
            );
            assert_eq!(used.contains(&id), !module_only, "{id}");
        }
    }

    #[test]
    fn demo_is_a_subset_of_project() {
        let project = Blueprint::project("org/acme");
        let demo = Blueprint::demo("org/acme");
        assert!(demo.directories().is_empty());
        for file in demo.files() {
            assert!(project.files().contains(file));
        }
        assert!(has_file(&demo, "starter/src/main/java/org/acme/Application.java"));
    }

    #[test]
    fn module_layout_derives_from_name() {
        let name = ModuleName::parse("user-profile").unwrap();
        let bp = Blueprint::module(&name, "com/example");

        assert!(has_file(&bp, "application/application-user-profile/pom.xml"));
        assert!(has_file(
            &bp,
            "application/application-user-profile/src/main/java/com/example/\
             application/userprofile/service/UserProfileService.java"
        ));
        assert!(bp.directories().contains(&PathBuf::from(
            "application/application-user-profile/src/test/java/com/example/application/userprofile"
        )));
        assert_eq!(bp.directories().len(), 6);
    }
}
