//! Unit test harness mirroring the source module tree

mod io;
mod spatial;
