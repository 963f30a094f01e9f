pub mod marcas;
