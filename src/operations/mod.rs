mod blend;
mod film_grain;
mod noise;

pub use film_grain::film_grain;
