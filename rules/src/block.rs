/// The closed set of ordering blocks a variable can belong to (spec.md §3).
///
/// Declaration order *is* the block precedence: the edit pipeline and
/// renderer never compare `BlockType` values by name, only by this implicit
/// rank via `#[derive(Ord)]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BlockType {
    Portname,
    Patchfiles,
    Maintainer,
    License,
    LicenseOld,
    Broken,
    Depends,
    Flavors,
    FlavorsHelper,
    Uses,
    Shebangfix,
    Uniquefiles,
    Apache,
    Elixir,
    Emacs,
    Erlang,
    Cmake,
    Configure,
    Qmake,
    Meson,
    Scons,
    Cabal,
    Cargo,
    Go,
    Lazarus,
    Linux,
    Nuget,
    Make,
    Cflags,
    Conflicts,
    Standard,
    Wrksrc,
    Users,
    Plist,
    Optdef,
    Optdesc,
    Opthelper,
    Unknown,
}

impl BlockType {
    #[must_use]
    pub const fn has_internal_order(self) -> bool {
        !matches!(self, Self::Opthelper | Self::Unknown)
    }
}
