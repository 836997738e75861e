use float_cmp::approx_eq;

pub trait Almost {
    fn almost(&self, other: &Self) -> bool;
}

impl Almost for f32 {
    fn almost(&self, other: &f32) -> bool {
        approx_eq!(f32, *self, *other, ulps = 5)
    }
}

impl Almost for f64 {
    fn almost(&self, other: &f64) -> bool {
        approx_eq!(f64, *self, *other, ulps = 5)
    }
}

impl<T> Almost for Option<T>
where
    T: Almost,
{
    fn almost(&self, other: &Option<T>) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.almost(&b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A, B> Almost for (A, B)
where
    A: Almost,
    B: Almost,
{
    fn almost(&self, other: &(A, B)) -> bool {
        self.0.almost(&other.0) && self.1.almost(&other.1)
    }
}

impl<T> Almost for [T]
where
    T: Almost,
{
    fn almost(&self, other: &[T]) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(value, other)| value.almost(other))
    }
}

impl<T> Almost for Vec<T>
where
    T: Almost,
{
    fn almost(&self, other: &Vec<T>) -> bool {
        self.as_slice().almost(other.as_slice())
    }
}
