mod declaration;
mod descriptor;
mod region;

pub use declaration::{CaseStyle, ParameterSpec, RawCase, UnionDeclaration};
pub use descriptor::{CaseDescriptor, PayloadShape, TupleElement};
pub use region::{Branch, BranchKind, ConditionalBlock, Region, RegionPath, RegionStep};
