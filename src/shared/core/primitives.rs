use uuid::Uuid;

/// Defines a UUID-backed identifier newtype with `Display`, conversions and
/// a `generate` constructor producing time-ordered v7 ids.
macro_rules! define_entity_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn generate() -> Self {
                $name(Uuid::now_v7())
            }

            pub fn value(&self) -> Uuid {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<Uuid> for $name {
            fn from(v: Uuid) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for Uuid {
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

define_entity_id!(WorkerId);
define_entity_id!(PeriodId);
define_entity_id!(CourseId);
define_entity_id!(EnrollmentId);
