//! jvgen Core - layered Java project scaffolding
//!
//! This crate provides the domain and application layers for the jvgen
//! generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            jvgen-cli (CLI)              │
//! │   prompts, flags, config, exit codes    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService, DemoService,          │
//! │  ModuleService, WriteJournal            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ Filesystem, TemplateStore,              │
//! │ DescriptorEditor                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     jvgen-adapters (Infrastructure)     │
//! │ LocalFilesystem, BuiltinTemplates,      │
//! │ PomEditor                               │
//! └─────────────────────────────────────────┘
//!
//! Domain layer (pure): ProjectConfig, RenderContext, ModuleName,
//! Blueprint, ProjectStructure
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jvgen_core::prelude::*;
//!
//! let config = ProjectConfig::builder()
//!     .group_id("com.mycompany")
//!     .artifact_id("shop")
//!     .build()?;
//!
//! let service = ScaffoldService::new(store, filesystem);
//! let summary = service.generate(&config)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        DemoService, ModuleReport, ModuleService, PatchStatus, ScaffoldService, WriteSummary,
        ports::{DescriptorEditor, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Blueprint, DescriptorInfo, ModuleName, PatchOutcome, ProjectConfig, ProjectStructure,
        RenderContext, TemplateId,
    };
    pub use crate::error::{JvgenError, JvgenResult};
}

