pub(crate) mod buffer;
pub(crate) mod renderer;
pub(crate) mod synthesizer;
