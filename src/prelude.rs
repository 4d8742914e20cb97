pub use crate::config::{
    FeatureConfig,
    ReparentPolicy,
};
pub use crate::data_structs::annotation::ordering::{
    by_length,
    by_location_length,
    by_type,
    try_sort,
};
pub use crate::data_structs::annotation::{
    DatabaseReference,
    DbXref,
    Feature,
    FeatureId,
    FeatureOrdering,
    FeatureSort,
    FeatureStore,
    Qualifier,
    QualifierIndex,
    UserPayload,
    DBXREF_QUALIFIER_NAME,
};
pub use crate::data_structs::coords::{
    Contig,
    SeqLocation,
};
pub use crate::data_structs::typedef::{
    FeatSmallStr,
    SeqPosNum,
};
pub use crate::data_structs::Strand;
