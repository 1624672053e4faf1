// Thu Oct 15 2026 - Alex

use crate::model::{Member, MemberOptions};

/// Builder input: either the arguments to build an entity from, or an
/// entity that is already built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<R, P> {
    Raw(R),
    Prebuilt(P),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSpec {
    pub name: String,
    pub ty: String,
    pub value: Option<String>,
    pub options: MemberOptions,
}

impl MemberSpec {
    pub fn new(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            value: None,
            options: MemberOptions::default(),
        }
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn options(mut self, options: MemberOptions) -> Self {
        self.options = options;
        self
    }
}

impl From<MemberSpec> for Entry<MemberSpec, Member> {
    fn from(spec: MemberSpec) -> Self {
        Entry::Raw(spec)
    }
}

impl From<Member> for Entry<MemberSpec, Member> {
    fn from(member: Member) -> Self {
        Entry::Prebuilt(member)
    }
}

impl From<(&str, &str)> for Entry<MemberSpec, Member> {
    fn from((name, ty): (&str, &str)) -> Self {
        Entry::Raw(MemberSpec::new(name, ty))
    }
}
