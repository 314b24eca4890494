/// External (serializable) representations of part lists and nesting results
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_part;
#[doc(inline)]
pub use export::export_placed_part;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::import_parts;
