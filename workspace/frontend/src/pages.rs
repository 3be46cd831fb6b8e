pub mod predictor;
pub mod visualizations;
