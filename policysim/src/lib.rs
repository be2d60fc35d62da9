//! data layer of the rail policy simulation dashboard.
//!
//! datasets are resolved through a [`store::LayeredResolver`], which prefers
//! a user-modified override over the immutable original. the coefficient
//! table is folded by a [`coefficient::CoefficientStructurer`] into the
//! generic parameter map, the PAI accessibility weights and the TCI transfer
//! convenience parameters. [`service::DataService`] is the entry point for a
//! host application.
pub mod app;
pub mod coefficient;
pub mod config;
pub mod kpi;
pub mod service;
pub mod store;
