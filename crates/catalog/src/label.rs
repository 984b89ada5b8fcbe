use crate::ids::LabelId;
use crate::name::phonetic_entity;

phonetic_entity! {
    /// Entity: Label (imprint).
    Label, LabelId, "label"
}
