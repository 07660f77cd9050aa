#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub base_price: f64,
}

impl Route {
    pub fn new(from: impl Into<String>, to: impl Into<String>, base_price: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            base_price,
        }
    }
}

///
/// Routes served by the train.
/// Every route is registered in both directions.
///
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("London", "Paris", 20.0),
        Route::new("London", "Brussels", 25.0),
        Route::new("Paris", "Amsterdam", 30.0),
        Route::new("Brussels", "Amsterdam", 15.0),
        Route::new("Paris", "Brussels", 18.0),
        Route::new("London", "Amsterdam", 35.0),
    ]
}
