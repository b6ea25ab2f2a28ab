//! Unit transform functions used by the default catalog.

const LB_PER_KG: f64 = 2.2046226218;
const MILES_PER_KM: f64 = 0.6213711922;
const FT_PER_M: f64 = 3.280839895;
const KELVIN_OFFSET: f64 = 273.15;
const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;

// Weight
pub fn kg_to_lb(x: f64) -> f64 {
    x * LB_PER_KG
}

pub fn lb_to_kg(x: f64) -> f64 {
    x / LB_PER_KG
}

// Temperature
pub fn c_to_f(x: f64) -> f64 {
    (x * 9.0 / 5.0) + 32.0
}

pub fn f_to_c(x: f64) -> f64 {
    (x - 32.0) * 5.0 / 9.0
}

pub fn c_to_k(x: f64) -> f64 {
    x + KELVIN_OFFSET
}

pub fn k_to_c(x: f64) -> f64 {
    x - KELVIN_OFFSET
}

// Distance
pub fn km_to_miles(x: f64) -> f64 {
    x * MILES_PER_KM
}

pub fn miles_to_km(x: f64) -> f64 {
    x / MILES_PER_KM
}

pub fn m_to_ft(x: f64) -> f64 {
    x * FT_PER_M
}

pub fn ft_to_m(x: f64) -> f64 {
    x / FT_PER_M
}

// Time
pub fn s_to_min(x: f64) -> f64 {
    x / SECONDS_PER_MINUTE
}

pub fn min_to_s(x: f64) -> f64 {
    x * SECONDS_PER_MINUTE
}

pub fn min_to_h(x: f64) -> f64 {
    x / MINUTES_PER_HOUR
}

pub fn h_to_min(x: f64) -> f64 {
    x * MINUTES_PER_HOUR
}
