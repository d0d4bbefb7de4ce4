use bitflags::bitflags;

bitflags! {
    /// Flags indicating various properties of a type.
    ///
    /// These flags are computed once when a node is allocated and cached so
    /// the checker can skip substitution and traversal on concrete types.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TyFlags: u16 {
        /// A template variable occurs somewhere in the type.
        const HAS_TYPE_VARS = 1;
        /// `Self` occurs somewhere in the type.
        const HAS_SELF = 1 << 1;
    }
}
