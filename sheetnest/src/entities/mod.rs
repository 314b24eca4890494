mod options;
mod part;
mod placed_part;
mod result;
mod sheet;

#[doc(inline)]
pub use options::NestingOptions;
#[doc(inline)]
pub use options::SortStrategy;
#[doc(inline)]
pub use part::NestingPart;
#[doc(inline)]
pub use part::PartShape;
#[doc(inline)]
pub use placed_part::OccupiedSpace;
#[doc(inline)]
pub use placed_part::PlacedPart;
#[doc(inline)]
pub use result::NestingResult;
#[doc(inline)]
pub use sheet::NestingSheet;
