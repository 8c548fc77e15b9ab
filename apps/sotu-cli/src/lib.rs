//! Pipeline glue for the `sotu` binary: settings and the per-figure steps.

pub mod pipeline;
pub mod settings;
