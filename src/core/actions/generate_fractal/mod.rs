pub mod errors;
pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_parallel_scoped_threads;
pub mod generate_fractal_serial;
pub mod ports;
pub mod tile_scheduler;
