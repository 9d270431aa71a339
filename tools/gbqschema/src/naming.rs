use clap::ValueEnum;
use gbqschema_core::AliasPolicy;

/// Type names written for `integer` and `number` properties.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TypeNaming {
    /// INTEGER / NUMERIC
    Canonical,
    /// INT64 / FLOAT64
    #[value(name = "64bit")]
    SixtyFourBit,
}

impl From<TypeNaming> for AliasPolicy {
    fn from(value: TypeNaming) -> Self {
        match value {
            TypeNaming::Canonical => AliasPolicy::Canonical,
            TypeNaming::SixtyFourBit => AliasPolicy::Preserve64Bit,
        }
    }
}
