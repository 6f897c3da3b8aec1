mod carousel;
mod config;
mod frames;
mod lifecycle;
mod marquee;
