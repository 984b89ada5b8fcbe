use crate::ids::PublisherId;
use crate::name::phonetic_entity;

phonetic_entity! {
    /// Entity: Publisher.
    Publisher, PublisherId, "publisher"
}
