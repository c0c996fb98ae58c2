mod clients;
mod common;
mod model_resolution;
