/// A trait to seal public traits.
pub trait Sealed {}

macro_rules! impl_Sealed {
    ( $( $Type:ty ),* ) => {
        $( impl Sealed for $Type {} )*
    };
}

impl_Sealed!(u8, u16, u32, u64, usize);
impl_Sealed!(i8, i16, i32, i64, isize);
