mod frame;
mod rules;
mod topology;
