pub mod bbox;
pub mod keying;
pub mod mask;
pub mod resize;
pub mod resolve;
