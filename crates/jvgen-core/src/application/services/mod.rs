//! Application services - orchestrate use cases.
//!
//! Each service owns the ports it needs and implements one user-facing
//! operation: generating a project, writing the demo, adding a module.

pub mod demo_service;
pub mod discovery;
pub mod module_service;
pub mod render;
pub mod scaffold_service;

pub use demo_service::DemoService;
pub use discovery::{ProjectContext, find_project_root, load_project};
pub use module_service::{ModulePlan, ModuleReport, ModuleService, PatchStatus};
pub use scaffold_service::ScaffoldService;
