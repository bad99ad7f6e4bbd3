use crate::{block::BlockType, flags::VariableFlags};

/// Per-variable formatting and ordering policy (spec.md §3 `VariableRule`).
#[derive(Clone, Copy, Debug)]
pub struct VariableRule {
    pub block: BlockType,
    pub flags: VariableFlags,
    pub uses: &'static [&'static str],
}

const fn rule(block: BlockType, flags: VariableFlags) -> VariableRule {
    VariableRule { block, flags, uses: &[] }
}

const fn rule_uses(block: BlockType, flags: VariableFlags, uses: &'static [&'static str]) -> VariableRule {
    VariableRule { block, flags, uses }
}

use VariableFlags as F;

/// The variable-order table (spec.md §4.3 (a)): an ordered sequence of
/// `{block, name, flags, uses}` records. Table order fixes both the block
/// boundary and the intra-block secondary order for variables whose block
/// `has_internal_order()`.
pub static ORDER: &[(&str, VariableRule)] = &[
    // -- PORTNAME --------------------------------------------------------
    ("PORTNAME", rule(BlockType::Portname, F::DEFAULT)),
    ("PORTVERSION", rule(BlockType::Portname, F::DEFAULT)),
    ("DISTVERSIONPREFIX", rule(BlockType::Portname, F::DEFAULT)),
    ("DISTVERSION", rule(BlockType::Portname, F::DEFAULT)),
    ("DISTVERSIONSUFFIX", rule(BlockType::Portname, F::DEFAULT)),
    ("PORTREVISION", rule(BlockType::Portname, F::DEFAULT)),
    ("PORTEPOCH", rule(BlockType::Portname, F::DEFAULT)),
    ("CATEGORIES", rule(BlockType::Portname, F::SORTED)),
    ("PKGNAMEPREFIX", rule(BlockType::Portname, F::DEFAULT)),
    ("PKGNAMESUFFIX", rule(BlockType::Portname, F::DEFAULT)),
    ("DISTNAME", rule(BlockType::Portname, F::DEFAULT)),
    ("EXTRACT_SUFX", rule(BlockType::Portname, F::DEFAULT)),
    ("DISTFILES", rule(BlockType::Portname, F::SORTED)),
    ("EXTRACT_ONLY", rule(BlockType::Portname, F::SORTED)),
    ("MASTER_SITES", rule(BlockType::Portname, F::SORTED)),
    ("MASTER_SITE_SUBDIR", rule(BlockType::Portname, F::SORTED)),
    // -- PATCHFILES --------------------------------------------------------
    ("PATCHFILES", rule(BlockType::Patchfiles, F::DEFAULT)),
    ("PATCH_SITES", rule(BlockType::Patchfiles, F::DEFAULT)),
    ("PATCH_DIST_STRIP", rule(BlockType::Patchfiles, F::DEFAULT)),
    // -- MAINTAINER --------------------------------------------------------
    ("MAINTAINER", rule(BlockType::Maintainer, F::CASE_SENSITIVE_SORT)),
    ("COMMENT", rule(BlockType::Maintainer, F::DEFAULT)),
    ("COMMENT_<SUBPKG>", rule(BlockType::Maintainer, F::SUBPKG_HELPER)),
    ("WWW", rule(BlockType::Maintainer, F::DEFAULT)),
    // -- LICENSE --------------------------------------------------------
    ("LICENSE", rule(BlockType::License, F::SORTED)),
    ("LICENSE_COMB", rule(BlockType::License, F::DEFAULT)),
    ("LICENSE_GROUPS", rule(BlockType::License, F::SORTED)),
    ("LICENSE_NAME", rule(BlockType::License, F::LEAVE_UNFORMATTED)),
    ("LICENSE_TEXT", rule(BlockType::License, F::LEAVE_UNFORMATTED)),
    ("LICENSE_FILE", rule(BlockType::License, F::DEFAULT)),
    ("LICENSE_DISTFILES", rule(BlockType::License, F::SORTED)),
    ("LICENSE_PERMS", rule(BlockType::License, F::NOT_COMPARABLE)),
    // -- LICENSE_OLD --------------------------------------------------------
    ("RESTRICTED", rule(BlockType::LicenseOld, F::LEAVE_UNFORMATTED)),
    ("NO_CDROM", rule(BlockType::LicenseOld, F::LEAVE_UNFORMATTED)),
    ("NO_PACKAGE", rule(BlockType::LicenseOld, F::LEAVE_UNFORMATTED)),
    ("LEGAL_TEXT", rule(BlockType::LicenseOld, F::LEAVE_UNFORMATTED)),
    // -- BROKEN --------------------------------------------------------
    ("DEPRECATED", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    ("EXPIRATION_DATE", rule(BlockType::Broken, F::DEFAULT)),
    ("FORBIDDEN", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    ("BROKEN", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    ("BROKEN_SSL", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    ("IGNORE", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    ("ONLY_FOR_ARCHS", rule(BlockType::Broken, F::SORTED)),
    ("ONLY_FOR_ARCHS_REASON", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    ("NOT_FOR_ARCHS", rule(BlockType::Broken, F::SORTED)),
    ("NOT_FOR_ARCHS_REASON", rule(BlockType::Broken, F::LEAVE_UNFORMATTED)),
    // -- DEPENDS --------------------------------------------------------
    ("FETCH_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("EXTRACT_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("PATCH_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("BUILD_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("LIB_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("RUN_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("TEST_DEPENDS", rule(BlockType::Depends, F::SORTED)),
    ("CPE_VENDOR", rule(BlockType::Depends, F::DEFAULT)),
    ("CPE_PRODUCT", rule(BlockType::Depends, F::DEFAULT)),
    // -- FLAVORS --------------------------------------------------------
    ("FLAVORS", rule(BlockType::Flavors, F::DEDUP)),
    ("FLAVOR", rule(BlockType::Flavors, F::DEFAULT)),
    // -- FLAVORS_HELPER --------------------------------------------------------
    ("<FLAVOR>_PKGNAMEPREFIX", rule(BlockType::FlavorsHelper, F::DEFAULT)),
    ("<FLAVOR>_PKGNAMESUFFIX", rule(BlockType::FlavorsHelper, F::DEFAULT)),
    ("<FLAVOR>_DESC", rule(BlockType::FlavorsHelper, F::DEFAULT)),
    // -- USES --------------------------------------------------------
    ("USES", rule(BlockType::Uses, F::SORTED.union(F::DEDUP))),
    ("USE_GITHUB", rule(BlockType::Uses, F::SORTED)),
    ("GH_ACCOUNT", rule(BlockType::Uses, F::DEFAULT)),
    ("GH_PROJECT", rule(BlockType::Uses, F::DEFAULT)),
    ("GH_TAGNAME", rule(BlockType::Uses, F::DEFAULT)),
    ("GH_TUPLE", rule(BlockType::Uses, F::PRINT_AS_NEWLINES)),
    ("USE_GITLAB", rule(BlockType::Uses, F::SORTED)),
    ("GL_ACCOUNT", rule(BlockType::Uses, F::DEFAULT)),
    ("GL_PROJECT", rule(BlockType::Uses, F::DEFAULT)),
    ("GL_TUPLE", rule(BlockType::Uses, F::PRINT_AS_NEWLINES)),
    ("USE_QT", rule_uses(BlockType::Uses, F::SORTED, &["qt"])),
    ("QT_COMPONENTS", rule_uses(BlockType::Uses, F::SORTED, &["qt"])),
    ("QT_BUILDTYPE", rule_uses(BlockType::Uses, F::DEFAULT, &["qt"])),
    ("USE_KDE", rule_uses(BlockType::Uses, F::SORTED, &["kde"])),
    ("KDE_PLASMA", rule_uses(BlockType::Uses, F::DEFAULT, &["kde"])),
    ("KDE_FRAMEWORKS", rule_uses(BlockType::Uses, F::SORTED, &["kde"])),
    ("USE_GNOME", rule_uses(BlockType::Uses, F::SORTED, &["gnome"])),
    ("GNOME_COMPONENTS", rule_uses(BlockType::Uses, F::SORTED, &["gnome"])),
    ("USE_XFCE", rule_uses(BlockType::Uses, F::SORTED, &["xfce"])),
    ("XFCE_COMPONENTS", rule_uses(BlockType::Uses, F::SORTED, &["xfce"])),
    ("USE_SDL", rule_uses(BlockType::Uses, F::SORTED, &["sdl"])),
    ("SDL_COMPONENTS", rule_uses(BlockType::Uses, F::SORTED, &["sdl"])),
    ("USE_WX", rule_uses(BlockType::Uses, F::DEFAULT, &["wx"])),
    ("WX_COMPONENTS", rule_uses(BlockType::Uses, F::SORTED, &["wx"])),
    ("WX_PREMK", rule_uses(BlockType::Uses, F::DEFAULT, &["wx"])),
    ("WX_UNICODE", rule_uses(BlockType::Uses, F::DEFAULT, &["wx"])),
    ("USE_GL", rule_uses(BlockType::Uses, F::SORTED, &["gl"])),
    ("GL_COMPONENTS", rule_uses(BlockType::Uses, F::SORTED, &["gl"])),
    ("USE_XORG", rule_uses(BlockType::Uses, F::SORTED, &["xorg"])),
    ("XORG_CAT", rule_uses(BlockType::Uses, F::DEFAULT, &["xorg"])),
    ("USE_LDCONFIG", rule_uses(BlockType::Uses, F::DEFAULT, &["ldconfig"])),
    ("LDCONFIG_DIRS", rule_uses(BlockType::Uses, F::SORTED, &["ldconfig"])),
    ("USE_OPENLDAP", rule_uses(BlockType::Uses, F::DEFAULT, &["openldap"])),
    ("WANT_OPENLDAP_SASL", rule_uses(BlockType::Uses, F::DEFAULT, &["openldap"])),
    ("USE_MYSQL", rule_uses(BlockType::Uses, F::DEFAULT, &["mysql"])),
    ("WANT_MYSQL_VER", rule_uses(BlockType::Uses, F::DEFAULT, &["mysql"])),
    ("USE_PGSQL", rule_uses(BlockType::Uses, F::DEFAULT, &["pgsql"])),
    ("WANT_PGSQL_VER", rule_uses(BlockType::Uses, F::DEFAULT, &["pgsql"])),
    ("USE_GECKO", rule_uses(BlockType::Uses, F::DEFAULT, &["gecko"])),
    ("GECKO_SPIDERMONKEY", rule_uses(BlockType::Uses, F::DEFAULT, &["gecko"])),
    ("USE_RUBY", rule_uses(BlockType::Uses, F::DEFAULT, &["ruby"])),
    ("RUBY_NAME", rule_uses(BlockType::Uses, F::DEFAULT, &["ruby"])),
    ("RUBY_SETUP", rule_uses(BlockType::Uses, F::DEFAULT, &["ruby"])),
    ("USE_TCL", rule_uses(BlockType::Uses, F::DEFAULT, &["tcl"])),
    ("TCL_VER", rule_uses(BlockType::Uses, F::DEFAULT, &["tcl"])),
    ("USE_PERL5", rule_uses(BlockType::Uses, F::DEFAULT, &["perl5"])),
    ("PERL_CONFIGURE", rule_uses(BlockType::Uses, F::DEFAULT, &["perl5"])),
    ("PERL_MODBUILD", rule_uses(BlockType::Uses, F::DEFAULT, &["perl5"])),
    ("PERL5_PACKLIST", rule_uses(BlockType::Uses, F::DEFAULT, &["perl5"])),
    ("USE_JAVA", rule(BlockType::Uses, F::DEFAULT)),
    ("JAVA_VERSION", rule(BlockType::Uses, F::DEFAULT)),
    ("JAVA_OS", rule(BlockType::Uses, F::SORTED)),
    ("JAVA_VENDOR", rule(BlockType::Uses, F::SORTED)),
    ("JAVA_BUILD", rule(BlockType::Uses, F::DEFAULT)),
    ("JAVA_RUN", rule(BlockType::Uses, F::DEFAULT)),
    ("JAVA_EXTRACT", rule(BlockType::Uses, F::DEFAULT)),
    ("DOS2UNIX_FILES", rule_uses(BlockType::Uses, F::SORTED, &["dos2unix"])),
    ("DOS2UNIX_GLOB", rule_uses(BlockType::Uses, F::SORTED, &["dos2unix"])),
    ("DOS2UNIX_REGEX", rule_uses(BlockType::Uses, F::SORTED, &["dos2unix"])),
    // -- SHEBANGFIX --------------------------------------------------------
    ("SHEBANG_LANG", rule_uses(BlockType::Shebangfix, F::SORTED, &["shebangfix"])),
    ("SHEBANG_GLOB", rule_uses(BlockType::Shebangfix, F::SORTED, &["shebangfix"])),
    ("SHEBANG_FILES", rule_uses(BlockType::Shebangfix, F::SORTED, &["shebangfix"])),
    // -- UNIQUEFILES --------------------------------------------------------
    ("UNIQUE_PREFIX", rule_uses(BlockType::Uniquefiles, F::DEFAULT, &["uniquefiles"])),
    ("UNIQUE_SUFFIX", rule_uses(BlockType::Uniquefiles, F::DEFAULT, &["uniquefiles"])),
    ("UNIQUE_FILES", rule_uses(BlockType::Uniquefiles, F::SORTED, &["uniquefiles"])),
    ("UNIQUE_DIRS", rule_uses(BlockType::Uniquefiles, F::SORTED, &["uniquefiles"])),
    // -- APACHE --------------------------------------------------------
    ("APACHE_VERSION", rule_uses(BlockType::Apache, F::DEFAULT, &["apache"])),
    ("AP_FAST_BUILD", rule_uses(BlockType::Apache, F::DEFAULT, &["apache"])),
    ("AP_GENPLIST", rule_uses(BlockType::Apache, F::DEFAULT, &["apache"])),
    ("AP_INC", rule_uses(BlockType::Apache, F::DEFAULT, &["apache"])),
    ("AP_LIB", rule_uses(BlockType::Apache, F::DEFAULT, &["apache"])),
    // -- ELIXIR --------------------------------------------------------
    ("ELIXIR_APP_NAME", rule_uses(BlockType::Elixir, F::DEFAULT, &["elixir"])),
    ("ELIXIR_LIB_ROOT", rule_uses(BlockType::Elixir, F::DEFAULT, &["elixir"])),
    ("ELIXIR_DEPS", rule_uses(BlockType::Elixir, F::SORTED, &["elixir"])),
    // -- EMACS --------------------------------------------------------
    ("EMACS_FLAVORS_EXCLUDE", rule_uses(BlockType::Emacs, F::SORTED, &["emacs"])),
    ("EMACS_NO_DEPENDS", rule_uses(BlockType::Emacs, F::DEFAULT, &["emacs"])),
    // -- ERLANG --------------------------------------------------------
    ("ERL_APP_NAME", rule_uses(BlockType::Erlang, F::DEFAULT, &["erlang"])),
    ("ERL_BUILD_DEPS", rule_uses(BlockType::Erlang, F::SORTED, &["erlang"])),
    ("ERL_BUILD_NAME", rule_uses(BlockType::Erlang, F::DEFAULT, &["erlang"])),
    ("ERL_DOCS", rule_uses(BlockType::Erlang, F::SORTED, &["erlang"])),
    // -- CMAKE --------------------------------------------------------
    ("CMAKE_ARGS", rule_uses(BlockType::Cmake, F::DEFAULT, &["cmake"])),
    ("CMAKE_ON", rule_uses(BlockType::Cmake, F::SORTED, &["cmake"])),
    ("CMAKE_OFF", rule_uses(BlockType::Cmake, F::SORTED, &["cmake"])),
    ("CMAKE_BUILD_TYPE", rule_uses(BlockType::Cmake, F::DEFAULT, &["cmake"])),
    ("CMAKE_SOURCE_PATH", rule_uses(BlockType::Cmake, F::DEFAULT, &["cmake"])),
    ("CMAKE_INSTALL_PREFIX", rule_uses(BlockType::Cmake, F::DEFAULT, &["cmake"])),
    // -- CONFIGURE --------------------------------------------------------
    ("HAS_CONFIGURE", rule(BlockType::Configure, F::DEFAULT)),
    ("GNU_CONFIGURE", rule(BlockType::Configure, F::DEFAULT)),
    ("GNU_CONFIGURE_PREFIX", rule(BlockType::Configure, F::DEFAULT)),
    ("CONFIGURE_SCRIPT", rule(BlockType::Configure, F::DEFAULT)),
    ("CONFIGURE_ARGS", rule(BlockType::Configure, F::DEFAULT)),
    ("CONFIGURE_ENV", rule(BlockType::Configure, F::DEFAULT)),
    ("CONFIGURE_OUTPUT_SOURCE_EMBEDS", rule(BlockType::Configure, F::DEFAULT)),
    ("AUTOMAKE_ARGS", rule_uses(BlockType::Configure, F::DEFAULT, &["autoreconf"])),
    ("ACLOCAL_ARGS", rule_uses(BlockType::Configure, F::DEFAULT, &["autoreconf"])),
    ("AUTORECONF_ARGS", rule_uses(BlockType::Configure, F::DEFAULT, &["autoreconf"])),
    ("AUTOHEADER_ARGS", rule_uses(BlockType::Configure, F::DEFAULT, &["autoreconf"])),
    ("AUTOUPDATE_ARGS", rule_uses(BlockType::Configure, F::DEFAULT, &["autoreconf"])),
    ("LIBTOOLIZE_ARGS", rule_uses(BlockType::Configure, F::DEFAULT, &["libtool"])),
    // -- QMAKE --------------------------------------------------------
    ("QMAKE_ARGS", rule_uses(BlockType::Qmake, F::DEFAULT, &["qmake"])),
    ("QMAKE_ENV", rule_uses(BlockType::Qmake, F::DEFAULT, &["qmake"])),
    ("QMAKE_SOURCE_PATH", rule_uses(BlockType::Qmake, F::DEFAULT, &["qmake"])),
    // -- MESON --------------------------------------------------------
    ("MESON_ARGS", rule_uses(BlockType::Meson, F::DEFAULT, &["meson"])),
    ("MESON_BUILD_DIR", rule_uses(BlockType::Meson, F::DEFAULT, &["meson"])),
    // -- SCONS --------------------------------------------------------
    ("CCFLAGS", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    ("CXXFLAGS_arg", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    ("LINKFLAGS", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    ("SCONS_ARGS", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    ("SCONS_BUILDENV", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    ("SCONS_ENV", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    ("SCONS_TARGET", rule_uses(BlockType::Scons, F::DEFAULT, &["scons"])),
    // -- CABAL --------------------------------------------------------
    ("CABAL_EXECUTABLES", rule_uses(BlockType::Cabal, F::SORTED, &["cabal"])),
    ("CABAL_FLAGS", rule_uses(BlockType::Cabal, F::DEFAULT, &["cabal"])),
    ("EXECUTABLE_DATADIR_VARS", rule_uses(BlockType::Cabal, F::SORTED, &["cabal"])),
    // -- CARGO --------------------------------------------------------
    ("CARGO_CRATES", rule_uses(BlockType::Cargo, F::PRINT_AS_NEWLINES, &["cargo"])),
    ("CARGO_FEATURES", rule_uses(BlockType::Cargo, F::SORTED, &["cargo"])),
    ("CARGO_BUILDDEP", rule_uses(BlockType::Cargo, F::DEFAULT, &["cargo"])),
    ("CARGO_BUILD_MODE", rule_uses(BlockType::Cargo, F::DEFAULT, &["cargo"])),
    ("CARGO_CARGOTOML", rule_uses(BlockType::Cargo, F::DEFAULT, &["cargo"])),
    ("CARGO_DIST_SUBDIR", rule_uses(BlockType::Cargo, F::DEFAULT, &["cargo"])),
    ("CARGO_TESTARGS", rule_uses(BlockType::Cargo, F::DEFAULT, &["cargo"])),
    // -- GO --------------------------------------------------------
    ("GO_MODULE", rule_uses(BlockType::Go, F::DEFAULT, &["go"])),
    ("GO_PKGNAME", rule_uses(BlockType::Go, F::DEFAULT, &["go"])),
    ("GO_TARGET", rule_uses(BlockType::Go, F::SORTED, &["go"])),
    ("GO_BUILDFLAGS", rule_uses(BlockType::Go, F::DEFAULT, &["go"])),
    // -- LAZARUS --------------------------------------------------------
    ("LAZARUS_PROJECT_FILES", rule_uses(BlockType::Lazarus, F::SORTED, &["lazarus"])),
    ("LAZARUS_NO_FLAVORS", rule_uses(BlockType::Lazarus, F::DEFAULT, &["lazarus"])),
    // -- LINUX --------------------------------------------------------
    ("USE_LINUX", rule_uses(BlockType::Linux, F::SORTED, &["linux"])),
    ("USE_LINUX_RPM", rule_uses(BlockType::Linux, F::DEFAULT, &["linux"])),
    ("LINUX_RPM_ARCH", rule_uses(BlockType::Linux, F::DEFAULT, &["linux"])),
    // -- NUGET --------------------------------------------------------
    ("NUGET_DEPENDS", rule_uses(BlockType::Nuget, F::SORTED, &["nuget"])),
    ("NUGET_PACKAGEDIR", rule_uses(BlockType::Nuget, F::DEFAULT, &["nuget"])),
    ("NUGET_FEEDS", rule_uses(BlockType::Nuget, F::SORTED, &["nuget"])),
    // -- MAKE --------------------------------------------------------
    ("MAKEFILE", rule(BlockType::Make, F::DEFAULT)),
    ("MAKE_ARGS", rule(BlockType::Make, F::DEFAULT)),
    ("MAKE_ENV", rule(BlockType::Make, F::DEFAULT)),
    ("MAKE_JOBS_UNSAFE", rule(BlockType::Make, F::DEFAULT)),
    ("ALL_TARGET", rule(BlockType::Make, F::DEFAULT)),
    ("INSTALL_TARGET", rule(BlockType::Make, F::DEFAULT)),
    ("TEST_TARGET", rule(BlockType::Make, F::DEFAULT)),
    // -- CFLAGS --------------------------------------------------------
    ("CFLAGS", rule(BlockType::Cflags, F::CASE_SENSITIVE_SORT)),
    ("CXXFLAGS", rule(BlockType::Cflags, F::CASE_SENSITIVE_SORT)),
    ("CPPFLAGS", rule(BlockType::Cflags, F::CASE_SENSITIVE_SORT)),
    ("LDFLAGS", rule(BlockType::Cflags, F::CASE_SENSITIVE_SORT)),
    ("LIBS", rule(BlockType::Cflags, F::CASE_SENSITIVE_SORT)),
    // -- CONFLICTS --------------------------------------------------------
    ("CONFLICTS", rule(BlockType::Conflicts, F::SORTED)),
    ("CONFLICTS_BUILD", rule(BlockType::Conflicts, F::SORTED)),
    ("CONFLICTS_INSTALL", rule(BlockType::Conflicts, F::SORTED)),
    // -- STANDARD --------------------------------------------------------
    ("NO_ARCH", rule(BlockType::Standard, F::DEFAULT)),
    ("NO_BUILD", rule(BlockType::Standard, F::DEFAULT)),
    ("NO_INSTALL", rule(BlockType::Standard, F::DEFAULT)),
    ("NO_MTREE", rule(BlockType::Standard, F::DEFAULT)),
    ("NO_TEST", rule(BlockType::Standard, F::DEFAULT)),
    ("NO_CHECKSUM", rule(BlockType::Standard, F::DEFAULT)),
    ("DISABLE_SIZE", rule(BlockType::Standard, F::DEFAULT)),
    ("DISTINFO_FILE", rule(BlockType::Standard, F::DEFAULT)),
    ("MAKE_JOBS_NUMBER", rule(BlockType::Standard, F::DEFAULT)),
    ("EXTRACT_CMD", rule(BlockType::Standard, F::DEFAULT)),
    ("EXTRACT_BEFORE_ARGS", rule(BlockType::Standard, F::DEFAULT)),
    ("EXTRACT_AFTER_ARGS", rule(BlockType::Standard, F::DEFAULT)),
    ("PATCH_WRKSRC", rule(BlockType::Standard, F::DEFAULT)),
    ("PATCHDIR", rule(BlockType::Standard, F::DEFAULT)),
    ("FILESDIR", rule(BlockType::Standard, F::DEFAULT)),
    ("SCRIPTDIR", rule(BlockType::Standard, F::DEFAULT)),
    ("SUB_FILES", rule(BlockType::Standard, F::SORTED)),
    ("SUB_LIST", rule(BlockType::Standard, F::SORTED)),
    ("INSTALLS_ICONS", rule(BlockType::Standard, F::DEFAULT)),
    ("DESKTOP_ENTRIES", rule_uses(BlockType::Standard, F::LEAVE_UNFORMATTED, &["desktop-file-utils"])),
    ("OPTIONS_SUB", rule(BlockType::Standard, F::DEFAULT)),
    // -- WRKSRC --------------------------------------------------------
    ("WRKSRC", rule(BlockType::Wrksrc, F::DEFAULT)),
    ("WRKSRC_SUBDIR", rule(BlockType::Wrksrc, F::DEFAULT)),
    ("NO_WRKSUBDIR", rule(BlockType::Wrksrc, F::DEFAULT)),
    // -- USERS --------------------------------------------------------
    ("USERS", rule(BlockType::Users, F::SORTED)),
    ("GROUPS", rule(BlockType::Users, F::SORTED)),
    // -- PLIST --------------------------------------------------------
    ("PLIST_FILES", rule(BlockType::Plist, F::SORTED)),
    ("PLIST_DIRS", rule(BlockType::Plist, F::SORTED)),
    ("PLIST_SUB", rule(BlockType::Plist, F::SORTED)),
    ("PORTDOCS", rule(BlockType::Plist, F::SORTED)),
    ("PORTEXAMPLES", rule(BlockType::Plist, F::SORTED)),
    ("PORTDATA", rule(BlockType::Plist, F::SORTED)),
    // -- OPTDEF (OPTIONS_DEFINE and friends) --------------------------------
    ("OPTIONS_DEFINE", rule(BlockType::Optdef, F::DEFAULT)),
    ("OPTIONS_DEFAULT", rule(BlockType::Optdef, F::DEFAULT)),
    ("OPTIONS_SINGLE", rule(BlockType::Optdef, F::DEFAULT)),
    ("OPTIONS_MULTI", rule(BlockType::Optdef, F::DEFAULT)),
    ("OPTIONS_RADIO", rule(BlockType::Optdef, F::DEFAULT)),
    ("OPTIONS_GROUP", rule(BlockType::Optdef, F::DEFAULT)),
    ("OPTIONS_EXCLUDE", rule(BlockType::Optdef, F::SORTED)),
    ("OPTIONS_SLAVE", rule(BlockType::Optdef, F::DEFAULT)),
    // -- OPTDESC --------------------------------------------------------
    ("<OPT>_DESC", rule(BlockType::Optdesc, F::DEFAULT)),
];

/// Additional `{block: UNKNOWN, name, flags}` records for otherwise
/// unclassified variables that still need a formatting policy
/// (spec.md §4.3 (b)).
pub static SPECIAL: &[(&str, VariableRule)] = &[
    ("DEV_ERROR", rule(BlockType::Unknown, F::LEAVE_UNFORMATTED)),
    ("DEV_WARNING", rule(BlockType::Unknown, F::LEAVE_UNFORMATTED)),
    ("PKGMESSAGE", rule(BlockType::Unknown, F::LEAVE_UNFORMATTED)),
    ("DESCR", rule(BlockType::Unknown, F::DEFAULT)),
    ("MASTERDIR", rule(BlockType::Unknown, F::DEFAULT)),
];

/// Look up the rule for exactly this name in the order/special tables
/// (helper-family matches are resolved separately; see `crate::recognizers`).
#[must_use]
pub fn lookup_exact(name: &str) -> Option<(usize, &'static VariableRule)> {
    ORDER
        .iter()
        .enumerate()
        .find(|(_, (n, _))| *n == name)
        .map(|(i, (_, r))| (i, r))
        .or_else(|| SPECIAL.iter().find(|(n, _)| *n == name).map(|(_, r)| (usize::MAX, r)))
}

#[cfg(test)]
mod tests {
    use super::{lookup_exact, ORDER};
    use crate::block::BlockType;

    #[test]
    fn test_order_has_no_duplicate_names() {
        let mut names: Vec<_> = ORDER.iter().map(|(n, _)| *n).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_lookup_exact_resolves_uses_module_variable() {
        let (_, r) = lookup_exact("USE_QT").unwrap();
        assert_eq!(r.block, BlockType::Uses);
        assert_eq!(r.uses, &["qt"]);
    }

    #[test]
    fn test_lookup_exact_unknown_name_absent() {
        assert!(lookup_exact("NOT_A_REAL_VARIABLE").is_none());
    }
}
