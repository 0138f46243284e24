mod common;
mod routing;
mod sampler;
