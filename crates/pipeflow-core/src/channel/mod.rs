//! Channels y sus utilidades.
//!
//! Un Channel es el slot lógico de input/output entre componentes: agrupa
//! artifacts de un único type name y expone `type_check` para que el
//! orquestador valide la compatibilidad productor → consumidor al construir
//! el grafo, antes de ejecutar nada.

mod base;
pub mod utils;

pub use base::Channel;
pub use utils::{as_channel, unwrap_channel_dict, ChannelSource};
