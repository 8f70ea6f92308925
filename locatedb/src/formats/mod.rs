pub mod locatedb;
