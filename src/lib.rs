//! Pipeflow Rust Library
//!
//! Este crate actúa como fachada de la capa tipada de pipeflow:
//! - Re-exporta `pipeflow_core` (Artifact, Channel, utilidades, store).
//! - Expone `binding` para validar los inputs declarados de un componente
//!   contra los Channels que le conecta el orquestador.
//!
//! Puede usarse por el orquestador, el executor u otros crates/clientes.

pub mod binding;

pub use pipeflow_core::*;

pub use binding::{bind_inputs, InputSpec};
