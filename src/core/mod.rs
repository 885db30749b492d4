/// Category seeding and listing
pub mod category;
/// Product service: validation and partial-update rules over the stores
pub mod product;

pub use product::ProductService;
