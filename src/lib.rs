pub mod ctl;
pub mod frame;
pub mod proto;
pub mod topo;

#[cfg(test)]
mod test;
