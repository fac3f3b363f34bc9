/// Declares a record type together with its wire layout.
///
/// The field list is the single source for the struct definition, the
/// [`RecordSchema`](crate::record::RecordSchema) consulted by validated
/// ingest, the binary codec and the serde representation used by trusted
/// ingest. Reordering fields changes the wire format.
///
/// An optional `where check = path` clause names a function
/// `fn(&Self, &str, &mut Vec<Violation>)` holding record invariants that only
/// validated ingest enforces.
///
/// ```
/// use record_wire::define_record;
/// use record_wire::field::FixedBytes;
/// use record_wire::record::Record;
///
/// define_record! {
///     /// Example pair.
///     pub struct Pair as "pair" {
///         pub a: u32,
///         pub b: FixedBytes<4>,
///     }
/// }
///
/// let pair = Pair { a: 42, b: FixedBytes::new([0xde, 0xad, 0xbe, 0xef]) };
/// assert_eq!(pair.to_hex(), "0000002adeadbeef");
/// ```
#[macro_export]
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $wire:literal $(where check = $check:path)? {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )+
        }

        impl $crate::record::Record for $name {
            fn schema() -> &'static $crate::record::RecordSchema {
                static SCHEMA: $crate::record::RecordSchema = $crate::record::RecordSchema {
                    name: $wire,
                    fields: &[$(
                        $crate::record::FieldSpec {
                            name: ::core::stringify!($field),
                            ty: <$ty as $crate::field::Field>::TYPE,
                            nullable: <$ty as $crate::field::Field>::NULLABLE,
                        },
                    )+],
                };
                &SCHEMA
            }

            fn write_fields(&self, out: &mut $crate::ser::ByteWriter) {
                $( $crate::field::Field::write(&self.$field, out); )+
            }

            fn read_fields(
                reader: &mut $crate::ser::ByteReader<'_>,
            ) -> $crate::ser::SerResult<Self> {
                ::core::result::Result::Ok(Self {
                    $(
                        $field: <$ty as $crate::field::Field>::read(
                            reader,
                            ::core::stringify!($field),
                        )?,
                    )+
                })
            }

            fn check_fields(
                &self,
                path: &str,
                violations: &mut ::std::vec::Vec<$crate::ingest::Violation>,
            ) {
                $(
                    $crate::field::Field::check(
                        &self.$field,
                        &$crate::ingest::join_path(path, ::core::stringify!($field)),
                        violations,
                    );
                )+
                $( $check(self, path, violations); )?
            }
        }

        impl $crate::field::Field for $name {
            const TYPE: $crate::field::FieldType =
                $crate::field::FieldType::Record(<$name as $crate::record::Record>::schema);

            fn write(&self, out: &mut $crate::ser::ByteWriter) {
                $crate::record::Record::write_fields(self, out);
            }

            fn read(
                reader: &mut $crate::ser::ByteReader<'_>,
                _field: &'static str,
            ) -> $crate::ser::SerResult<Self> {
                <$name as $crate::record::Record>::read_fields(reader)
            }

            fn check(&self, path: &str, violations: &mut ::std::vec::Vec<$crate::ingest::Violation>) {
                $crate::record::Record::check_fields(self, path, violations);
            }
        }
    };
}
