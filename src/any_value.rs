use std::any::{Any, TypeId};

/// A borrowed, type-erased value that remembers its concrete type
#[derive(Debug)]
pub(crate) struct AnyRef<'a> {
    pub(crate) type_id: TypeId,
    pub(crate) value: &'a dyn Any,
}

impl<'a> AnyRef<'a> {
    /// Wrap a type-erased reference
    pub(crate) fn new(value: &'a dyn Any) -> Self {
        Self {
            type_id: value.type_id(),
            value,
        }
    }

    /// Check if the referenced value is of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get the referenced value as a T if the types match
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&'a T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.value.downcast_ref::<T>()
    }

    /// Address of the referenced value, used for identity checks
    pub(crate) fn addr(&self) -> *const () {
        self.value as *const dyn Any as *const ()
    }
}
