mod error;
mod progress;
mod visualization;
