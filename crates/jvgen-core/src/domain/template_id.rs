use std::fmt;

/// Identifier of one static template.
///
/// [`TemplateId::name`] is the template's relative file name; stores use it
/// both for the built-in copy and for overrides on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    // Build descriptors
    ParentPom,
    CommonPom,
    DomainPom,
    InfrastructurePom,
    AdapterRestPom,
    AdapterSchedulePom,
    ApplicationUserPom,
    StarterPom,
    ApplicationModulePom,

    // Project files
    ApplicationYml,
    ApplicationDevYml,
    Readme,
    GitIgnore,
    UserTableSql,

    // Starter
    ApplicationMain,

    // Common layer
    Result,
    BusinessException,
    ErrorCode,

    // Domain layer
    User,
    UserRepository,
    UserDomainService,
    UserCreatedEvent,

    // Infrastructure layer
    UserDo,
    UserMapper,
    UserRepositoryImpl,

    // Application layer
    UserDto,
    CreateUserCommand,
    UpdateUserCommand,
    UserAssembler,
    UserService,
    RegisterUserExecutor,
    UserEventListener,

    // Adapter layer
    CreateUserRequest,
    UpdateUserRequest,
    UserResponseVo,
    UserControllerAssembler,
    ResponseVoAssembler,
    LoggingFilter,
    AuthInterceptor,
    WebMvcConfig,
    GlobalExceptionHandler,
    UserController,
    HealthController,

    // Added modules
    ModuleService,
}

impl TemplateId {
    pub const ALL: [TemplateId; 44] = [
        Self::ParentPom,
        Self::CommonPom,
        Self::DomainPom,
        Self::InfrastructurePom,
        Self::AdapterRestPom,
        Self::AdapterSchedulePom,
        Self::ApplicationUserPom,
        Self::StarterPom,
        Self::ApplicationModulePom,
        Self::ApplicationYml,
        Self::ApplicationDevYml,
        Self::Readme,
        Self::GitIgnore,
        Self::UserTableSql,
        Self::ApplicationMain,
        Self::Result,
        Self::BusinessException,
        Self::ErrorCode,
        Self::User,
        Self::UserRepository,
        Self::UserDomainService,
        Self::UserCreatedEvent,
        Self::UserDo,
        Self::UserMapper,
        Self::UserRepositoryImpl,
        Self::UserDto,
        Self::CreateUserCommand,
        Self::UpdateUserCommand,
        Self::UserAssembler,
        Self::UserService,
        Self::RegisterUserExecutor,
        Self::UserEventListener,
        Self::CreateUserRequest,
        Self::UpdateUserRequest,
        Self::UserResponseVo,
        Self::UserControllerAssembler,
        Self::ResponseVoAssembler,
        Self::LoggingFilter,
        Self::AuthInterceptor,
        Self::WebMvcConfig,
        Self::GlobalExceptionHandler,
        Self::UserController,
        Self::HealthController,
        Self::ModuleService,
    ];

    /// Whether the template is XML, so rendered values need escaping.
    pub fn is_xml(self) -> bool {
        self.name().ends_with(".xml")
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ParentPom => "pom/parent.xml",
            Self::CommonPom => "pom/common.xml",
            Self::DomainPom => "pom/domain.xml",
            Self::InfrastructurePom => "pom/infrastructure.xml",
            Self::AdapterRestPom => "pom/adapter-rest.xml",
            Self::AdapterSchedulePom => "pom/adapter-schedule.xml",
            Self::ApplicationUserPom => "pom/application-user.xml",
            Self::StarterPom => "pom/starter.xml",
            Self::ApplicationModulePom => "pom/application-module.xml",
            Self::ApplicationYml => "config/application.yml",
            Self::ApplicationDevYml => "config/application-dev.yml",
            Self::Readme => "project/README.md",
            Self::GitIgnore => "project/gitignore",
            Self::UserTableSql => "demo/V1__create_user_table.sql",
            Self::ApplicationMain => "java/starter/Application.java",
            Self::Result => "java/common/Result.java",
            Self::BusinessException => "java/common/BusinessException.java",
            Self::ErrorCode => "java/common/ErrorCode.java",
            Self::User => "java/domain/User.java",
            Self::UserRepository => "java/domain/UserRepository.java",
            Self::UserDomainService => "java/domain/UserDomainService.java",
            Self::UserCreatedEvent => "java/domain/UserCreatedEvent.java",
            Self::UserDo => "java/infrastructure/UserDO.java",
            Self::UserMapper => "java/infrastructure/UserMapper.java",
            Self::UserRepositoryImpl => "java/infrastructure/UserRepositoryImpl.java",
            Self::UserDto => "java/application/UserDTO.java",
            Self::CreateUserCommand => "java/application/CreateUserCommand.java",
            Self::UpdateUserCommand => "java/application/UpdateUserCommand.java",
            Self::UserAssembler => "java/application/UserAssembler.java",
            Self::UserService => "java/application/UserService.java",
            Self::RegisterUserExecutor => "java/application/RegisterUserExecutor.java",
            Self::UserEventListener => "java/application/UserEventListener.java",
            Self::CreateUserRequest => "java/adapter/CreateUserRequest.java",
            Self::UpdateUserRequest => "java/adapter/UpdateUserRequest.java",
            Self::UserResponseVo => "java/adapter/UserResponseVO.java",
            Self::UserControllerAssembler => "java/adapter/UserControllerAssembler.java",
            Self::ResponseVoAssembler => "java/adapter/ResponseVOAssembler.java",
            Self::LoggingFilter => "java/adapter/LoggingFilter.java",
            Self::AuthInterceptor => "java/adapter/AuthInterceptor.java",
            Self::WebMvcConfig => "java/adapter/WebMvcConfig.java",
            Self::GlobalExceptionHandler => "java/adapter/GlobalExceptionHandler.java",
            Self::UserController => "java/adapter/UserController.java",
            Self::HealthController => "java/adapter/HealthController.java",
            Self::ModuleService => "java/module/Service.java",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_relative() {
        let names: HashSet<_> = TemplateId::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), TemplateId::ALL.len());
        assert!(names.iter().all(|n| !n.starts_with('/')));
    }
}
