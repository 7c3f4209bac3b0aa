mod model;

pub use model::IPriceModel;
