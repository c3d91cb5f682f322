/// Implements a basic `Debug` trait for types using their type name.
///
/// Collaborator trait objects carry no inspectable state of their own, so printing
/// the type name is all a `Debug` impl can usefully do for them.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}
