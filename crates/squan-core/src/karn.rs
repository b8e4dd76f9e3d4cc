// SPDX-License-Identifier: Apache-2.0
//! The fixed notation tables: karnotation names and case shorthands.
//!
//! Karnotation writes Square-1 algorithms as named turns (`U`, `D'`, `e`,
//! `m`, `F`, ...) and compounds (`U4'`, `UD2`, `W`) with an implicit layer
//! swap between consecutive moves. The named-turn table rewrites every name
//! down to a canonical `top,bottom` slot-offset pair; compounds first
//! rewrite to simpler names and reach numeric form on a later pass.
//!
//! Case shorthands (`bjj`, `aa`, `jr`, ...) are one level higher: each
//! names a whole slash-delimited karnotation fragment, and most have
//! geometry-dependent variants selected by the layers' current alignment
//! parity (see [`crate::shorthand`]). Their table keys are the lowercased
//! name followed by the alignment suffix; `bjj`, `fjj` and `nn` are
//! alignment-independent and keyed by bare name.
//!
//! Both tables are process-wide constants, built once and never mutated.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::rewrite::RewriteTable;

/// Named-turn rewrite rules. Keys and replacements carry their boundary
/// spaces (see [`RewriteTable`]); upper/lower case selects the top/bottom
/// layer for slice-style names, so lookups are case-sensitive.
static KARN_TO_WCA: &[(&str, &str)] = &[
    (" U4 ", " U U' U U' "),
    (" U4' ", " U' U U' U "),
    (" D4 ", " D D' D D' "),
    (" D4' ", " D' D D' D "),
    (" u4 ", " u u' u u' "),
    (" u4' ", " u' u u' u "),
    (" d4 ", " d d' d d' "),
    (" d4' ", " d' d d' d "),
    (" U3 ", " U U' U "),
    (" U3' ", " U' U U' "),
    (" D3 ", " D D' D "),
    (" D3' ", " D' D D' "),
    (" u3 ", " u u' u "),
    (" u3' ", " u' u u' "),
    (" d3 ", " d d' d "),
    (" d3' ", " d' d d' "),
    (" F3 ", " F F' F "),
    (" F3' ", " F' F F' "),
    (" f3 ", " f f' f "),
    (" f3' ", " f' f f' "),
    (" W ", " U U' "),
    (" W' ", " U' U "),
    (" B ", " D D' "),
    (" B' ", " D' D "),
    (" w ", " u u' "),
    (" w' ", " u' u "),
    (" b ", " d d' "),
    (" b' ", " d' d "),
    (" F2 ", " F F' "),
    (" F2' ", " F' F "),
    (" f2 ", " f f' "),
    (" f2' ", " f' f "),
    (" UU ", " U U "),
    (" UU' ", " U' U' "),
    (" DD ", " D D "),
    (" DD' ", " D' D' "),
    (" U2 ", " 6,0 "),
    (" U2D ", " 6,3 "),
    (" U2D' ", " 6,-3 "),
    (" U2D2 ", " 6,6 "),
    (" D2 ", " 0,6 "),
    (" UD2 ", " 3,6 "),
    (" U'D2 ", " -3,6 "),
    (" U ", " 3,0 "),
    (" U' ", " -3,0 "),
    (" D ", " 0,3 "),
    (" D' ", " 0,-3 "),
    (" E ", " 3,-3 "),
    (" E' ", " -3,3 "),
    (" e ", " 3,3 "),
    (" e' ", " -3,-3 "),
    (" u ", " 2,-1 "),
    (" u' ", " -2,1 "),
    (" d ", " -1,2 "),
    (" d' ", " 1,-2 "),
    (" F' ", " -4,-1 "),
    (" F ", " 4,1 "),
    (" f' ", " -1,-4 "),
    (" f ", " 1,4 "),
    (" T ", " 2,-4 "),
    (" T' ", " -2,4 "),
    (" t' ", " -4,2 "),
    (" t ", " 4,-2 "),
    (" m ", " 2,2 "),
    (" m' ", " -2,-2 "),
    (" M' ", " -1,-1 "),
    (" M ", " 1,1 "),
    (" u2 ", " 5,-1 "),
    (" u2' ", " -5,1 "),
    (" d2 ", " -1,5 "),
    (" d2' ", " 1,-5 "),
    (" K' ", " -5,-2 "),
    (" K ", " 5,2 "),
    (" k ", " 2,5 "),
    (" k' ", " -2,-5 "),
];

/// Case-shorthand expansions, keyed by lowercased name plus alignment
/// suffix. The leading and trailing slash of every fragment are real layer
/// swaps: a shorthand always begins and ends on a slice.
static SHORTHANDS: &[(&str, &str)] = &[
    // Alignment-independent.
    ("bjj", "/U' e D'/"),
    ("fjj", "/U e' D/"),
    ("nn", "/E E'/"),
    ("bpj10", "/d m' U/"),
    ("bpj0-1", "/u' m D'/"),
    ("fpj10", "/u m' D/"),
    ("fpj0-1", "/d' m U'/"),
    ("aa10", "/u m' u T'/"),
    ("aa0-1", "/U m' U t'/"),
    ("fadj10", "/D M' d'/"),
    ("dadj10", "/D M' d'/"),
    ("fadj0-1", "/U' M u/"),
    ("u'adj0-1", "/U' M u/"),
    ("badj10", "/U M u'/"),
    ("uadj10", "/U M u'/"),
    ("badj0-1", "/D' M d/"),
    ("d'adj0-1", "/D' M d/"),
    ("bb10", "/T u' e U'/"),
    ("bb0-1", "/t d e' D/"),
    ("fdd10", "/D e' d t/"),
    ("fdd0-1", "/U' e u' T/"),
    ("bdd10", "/U e' u T'/"),
    ("bdd0-1", "/D' e d' t'/"),
    ("ff10", "/d m' d M E/"),
    ("fv10", "/d4/"),
    ("fv0-1", "/d4'/"),
    ("vf10", "/u4/"),
    ("vf0-1", "/u4'/"),
    ("jf10", "/w D' u T'/"),
    ("jf0-1", "/w' D u' T/"),
    ("fj10", "/b U' d t/"),
    ("fj0-1", "/b' U d' t'/"),
    ("jr00", "/e' w e/"),
    ("jr10", "/e' b e/"),
    ("jr0-1", "/e' w' e/"),
    ("jr1-1", "/e' b' e/"),
    ("rj00", "/e b' e'/"),
    ("rj10", "/e w e'/"),
    ("rj0-1", "/e b' e'/"),
    ("rj1-1", "/e w e'/"),
    ("jv10", "/b D d d2'/"),
    ("jv0-1", "/b' D' d' d2/"),
    ("vj10", "/w U u u2'/"),
    ("vj0-1", "/w' U' u' u2/"),
    ("kk10", "/u m' U E'/"),
    ("kk0-1", "/U m' u E'/"),
    ("opp10", "/u2 u2'/"),
    ("opp0-1", "/u2' u2/"),
    ("pn10", "/T T'/"),
    ("pn0-1", "/t t'/"),
    ("px10", "/f' d3' f'/"),
    ("px0-1", "/f d3 f/"),
    ("xp10", "/F' u3' F'/"),
    ("xp0-1", "/F u3 F/"),
    ("tt10", "/d m' F' u2'/"),
    ("fss10", "/u M D' E'/"),
    ("fss0-1", "/D' M u E'/"),
    ("bss10", "/D M' u' E/"),
    ("bss0-1", "/U' M d E/"),
    ("vv10", "/u M u m' E'/"),
    ("zz10", "/u M t' M D'/"),
    ("zz0-1", "/D' M t' M u/"),
];

/// Shorthand names resolved without an alignment suffix.
pub(crate) const ALIGNMENT_FREE: [&str; 3] = ["bjj", "fjj", "nn"];

static KARN_TABLE: OnceLock<RewriteTable> = OnceLock::new();
static SHORTHAND_TABLE: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();

/// The compiled named-turn rewrite table.
pub fn karn_table() -> &'static RewriteTable {
    KARN_TABLE.get_or_init(|| RewriteTable::new(KARN_TO_WCA))
}

/// The case-shorthand lookup table.
pub(crate) fn shorthand_table() -> &'static FxHashMap<&'static str, &'static str> {
    SHORTHAND_TABLE.get_or_init(|| SHORTHANDS.iter().copied().collect())
}
