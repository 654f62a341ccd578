use tabled::Tabled;

#[derive(Tabled)]
pub struct Reading {
    pub label: &'static str,
    pub unit: &'static str,
    pub current: f64,
    pub min: f64,
    pub max: f64,
}
