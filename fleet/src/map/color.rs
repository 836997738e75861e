use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Display for Hsl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Sum of the UTF-16 code units of `vehicle_id`, mod 360, as a hue.
pub fn colour_of(vehicle_id: &str) -> Hsl {
    let sum: u64 = vehicle_id.encode_utf16().map(u64::from).sum();
    Hsl {
        hue: (sum % 360) as u16,
        saturation: 70,
        lightness: 50,
    }
}
