//! Named list types

/// Declare a distinct named list type for an element type.
///
/// The generated newtype wraps a [`List`](crate::List), dereferences to it,
/// and implements `Default` and `From<List<T>>`. Extra derives can be passed
/// as attributes; they require the matching impls on the element type.
///
/// ```
/// use dynlist_core::list_type;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// pub struct Vector2 {
///     x: i32,
///     y: i32,
/// }
///
/// list_type!(#[derive(Debug, Clone)] pub Vector2List, Vector2);
///
/// let mut points = Vector2List::new();
/// points.append(Vector2 { x: 10, y: 10 }).unwrap();
/// assert_eq!(points.len(), 1);
/// points.deinit();
/// ```
#[macro_export]
macro_rules! list_type {
    ($(#[$meta:meta])* $vis:vis $name:ident, $elem:ty) => {
        $(#[$meta])*
        #[derive(Default)]
        $vis struct $name($crate::List<$elem>);

        impl $name {
            /// Create an empty, unallocated list
            #[allow(dead_code)]
            pub const fn new() -> Self {
                Self($crate::List::new())
            }

            /// Create an empty, unallocated list with the given configuration
            #[allow(dead_code)]
            pub const fn with_config(config: $crate::ListConfig) -> Self {
                Self($crate::List::with_config(config))
            }

            /// Unwrap the inner list
            #[allow(dead_code)]
            pub fn into_inner(self) -> $crate::List<$elem> {
                self.0
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::List<$elem>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::core::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::core::convert::From<$crate::List<$elem>> for $name {
            fn from(list: $crate::List<$elem>) -> Self {
                Self(list)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{GrowthPolicy, List, ListConfig, Status};

    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    struct Vector2 {
        x: i32,
        y: i32,
    }

    list_type!(#[derive(Debug, Clone)] Vector2List, Vector2);
    list_type!(ByteList, u8);

    #[test]
    fn test_named_list_behaves_like_list() {
        let mut points = Vector2List::new();
        assert_eq!(points.status(), Status::Uninitialized);

        points.append(Vector2 { x: 10, y: 10 }).unwrap();
        points.append(Vector2 { x: -1, y: 2 }).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Vector2 { x: -1, y: 2 });

        points.deinit();
        assert!(points.is_empty());
    }

    #[test]
    fn test_named_list_with_config_and_conversion() {
        let bytes = ByteList::with_config(ListConfig::new().growth(GrowthPolicy::Exact));
        assert_eq!(bytes.config().growth, GrowthPolicy::Exact);

        let mut inner = List::new();
        inner.append(3u8).unwrap();
        let wrapped = ByteList::from(inner);
        assert_eq!(wrapped.into_inner().as_slice(), &[3]);
    }

    #[test]
    fn test_caller_fields_untouched() {
        struct Tagged {
            label: &'static str,
            items: List<u16>,
        }

        let mut tagged = Tagged {
            label: "sensor",
            items: List::new(),
        };
        tagged.items.init(4).unwrap();
        tagged.items.append(9).unwrap();
        tagged.items.deinit();

        assert_eq!(tagged.label, "sensor");
    }
}
