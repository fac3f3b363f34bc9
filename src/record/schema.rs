use crate::field::FieldType;

/// Declaration of one record field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name, identical to the key used in structured form.
    pub name: &'static str,
    /// Semantic type.
    pub ty: FieldType,
    /// Whether the field may be absent.
    pub nullable: bool,
}

impl FieldSpec {
    /// Smallest number of bytes the field can occupy on the wire.
    pub fn min_encoded_len(&self) -> usize {
        if self.nullable {
            return 1;
        }
        match self.ty {
            FieldType::Uint { width } => width,
            FieldType::Bool => 1,
            FieldType::FixedBytes { len } => len,
            FieldType::Blob => 4,
            FieldType::Record(schema) => schema().min_encoded_len(),
        }
    }
}

/// Ordered field layout of a record type.
#[derive(Debug)]
pub struct RecordSchema {
    /// Record type name used in diagnostics.
    pub name: &'static str,
    /// Fields in wire order.
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Field names in wire order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }

    /// Smallest encoding any instance of the record can have.
    pub fn min_encoded_len(&self) -> usize {
        self.fields.iter().map(FieldSpec::min_encoded_len).sum()
    }
}
