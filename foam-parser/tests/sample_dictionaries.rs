//! Outlines of the curated sample dictionaries
//!
//! Each test loads one file from `samples/` and checks the shape of its outline with
//! assert_outline. Line numbers are zero based.

use foam_parser::foam::ast::SymbolKind;
use foam_parser::foam::parsing::ParseOptions;
use foam_parser::foam::testing::{assert_outline, Samples};
use rstest::rstest;

fn skipping_block_comments() -> ParseOptions {
    ParseOptions {
        skip_block_comments: true,
        ..ParseOptions::default()
    }
}

#[rstest(options => [ParseOptions::default(), skipping_block_comments()])]
fn test_control_dict(options: ParseOptions) {
    let outline = Samples::control_dict().outline_with(&options);

    assert_outline(&outline)
        .item_count(16)
        .item(0, |header| {
            header
                .name("FoamFile")
                .kind(SymbolKind::FileHeader)
                .detail("header")
                .spans_lines(7, 14)
                .anchored_at(7)
                .child_count(5)
                .child(0, |c| c.name("version").kind(SymbolKind::ConstantLiteral).detail("2.0"))
                .child(1, |c| c.name("format").kind(SymbolKind::ConstantLiteral).detail("ascii"))
                .child(2, |c| c.name("class").kind(SymbolKind::ClassLike).detail("dictionary"))
                .child(3, |c| c.name("location").kind(SymbolKind::FileHeader).detail("\"system\""))
                .child(4, |c| c.name("object").kind(SymbolKind::ClassLike).detail("controlDict"))
        })
        .item(1, |node| {
            node.name("application")
                .kind(SymbolKind::Property)
                .detail("icoFoam")
                .spans_lines(17, 17)
        })
        .item(5, |node| node.name("endTime").detail("0.5"))
        .item(15, |node| {
            node.name("runTimeModifiable")
                .detail("true")
                .spans_lines(45, 45)
                .child_count(0)
        });
}

#[rstest]
fn test_fv_solution() {
    let outline = Samples::fv_solution().outline();

    assert_outline(&outline)
        .names(&["FoamFile", "solvers", "PISO"])
        .item(1, |solvers| {
            solvers
                .kind(SymbolKind::ObjectBlock)
                .detail("block")
                .spans_lines(17, 40)
                .children(|solvers| solvers.names(&["p", "pFinal", "U"]))
                .child(0, |p| {
                    p.spans_lines(19, 25)
                        .child_count(4)
                        .child(0, |c| c.name("solver").detail("PCG"))
                        .child(2, |c| c.name("tolerance").detail("1e-06"))
                })
                // `$p;` is a macro expansion and yields nothing
                .child(1, |p_final| {
                    p_final
                        .spans_lines(27, 31)
                        .child_count(1)
                        .child(0, |c| c.name("relTol").detail("0"))
                })
                .child(2, |u| u.spans_lines(33, 39).child_count(4))
        })
        .item(2, |piso| {
            piso.spans_lines(42, 48)
                .children(|c| c.names(&["nCorrectors", "nNonOrthogonalCorrectors", "pRefCell", "pRefValue"]))
        });
}

#[rstest]
fn test_block_mesh_dict() {
    let outline = Samples::block_mesh_dict().outline();

    // `vertices`, `blocks` and `mergePatchPairs` are followed by `(` rather than `{`.
    // Reserved names always resolve on braces, so `edges` and each `faces` list run on to
    // the next `}` that brings their count back to zero.
    assert_outline(&outline)
        .names(&["FoamFile", "convertToMeters", "edges", "boundary"])
        .item(1, |node| node.kind(SymbolKind::Property).detail("0.1"))
        .item(2, |edges| {
            edges
                .kind(SymbolKind::Struct)
                .detail("edges")
                .spans_lines(36, 49)
                .child_count(0)
        })
        .item(3, |boundary| {
            boundary
                .kind(SymbolKind::Struct)
                .detail("boundary")
                .spans_lines(40, 76)
                .children(|patches| patches.names(&["movingWall", "fixedWalls", "frontAndBack"]))
                .child(0, |wall| {
                    wall.kind(SymbolKind::ObjectBlock)
                        .spans_lines(42, 51)
                        .child(0, |c| c.name("type").detail("wall"))
                        .child(1, |faces| {
                            faces
                                .name("faces")
                                .kind(SymbolKind::Struct)
                                .spans_lines(45, 51)
                        })
                })
                .child(1, |walls| walls.spans_lines(50, 61))
                .child(2, |patch| {
                    patch
                        .kind(SymbolKind::InterfaceBlock)
                        .detail("boundary")
                        .spans_lines(60, 76)
                        .child(1, |faces| faces.name("faces").spans_lines(63, 76))
                })
        });
}

#[rstest]
fn test_transport_properties() {
    let outline = Samples::transport_properties().outline();

    assert_outline(&outline)
        .names(&["FoamFile", "transportModel", "nu", "rho"])
        .item(0, |header| {
            header.child(3, |c| c.name("location").detail("\"constant\""))
        })
        .item(1, |node| node.kind(SymbolKind::Property).detail("Newtonian"))
        .item(2, |nu| {
            nu.kind(SymbolKind::ConstantUnit)
                .detail("0 2 -1 0 0 0 0")
                .spans_lines(19, 19)
        })
        .item(3, |rho| rho.kind(SymbolKind::ConstantUnit).detail("1 -3 0 0 0 0 0"));
}

#[rstest]
fn test_velocity_field() {
    let outline = Samples::velocity_field().outline();

    assert_outline(&outline)
        .names(&["FoamFile", "dimensions", "internalField", "boundaryField"])
        .item(0, |header| {
            header
                .spans_lines(7, 13)
                .child_count(4)
                .child(2, |c| c.name("class").detail("volVectorField"))
        })
        .item(1, |dims| dims.kind(SymbolKind::ConstantUnit).detail("0 1 -1 0 0 0 0"))
        .item(2, |field| {
            field
                .kind(SymbolKind::Property)
                .detail("uniform (0 0 0)")
        })
        .item(3, |patches| {
            patches
                .kind(SymbolKind::ObjectBlock)
                .spans_lines(20, 37)
                .children(|c| c.names(&["movingWall", "fixedWalls", "frontAndBack"]))
                .child(0, |wall| {
                    wall.spans_lines(22, 26)
                        .child(1, |c| c.name("value").detail("uniform (1 0 0)"))
                })
                .child(2, |patch| patch.kind(SymbolKind::InterfaceBlock).spans_lines(33, 36))
        });
}

#[rstest]
fn test_probes_lists() {
    let outline = Samples::get("probes").outline();

    assert_outline(&outline)
        .names(&[
            "FoamFile",
            "type",
            "libs",
            "writeControl",
            "writeInterval",
            "fields",
            "probeLocations",
        ])
        .item(2, |libs| libs.detail("(\"libsampling.so\")"))
        .item(5, |fields| {
            fields
                .kind(SymbolKind::ArrayList)
                .detail("list")
                .spans_lines(23, 26)
                .child_count(0)
        })
        .item(6, |locations| locations.kind(SymbolKind::ArrayList).spans_lines(28, 31));
}

#[rstest]
fn test_poly_mesh_patches_follow_indentation() {
    // The patches sit inside a `( )` list that yields no node, so the closest shallower
    // node on the stack is the header.
    let outline = Samples::get("boundary").outline();

    assert_outline(&outline).item_count(1).item(0, |header| {
        header
            .name("FoamFile")
            .spans_lines(7, 39)
            .anchored_at(7)
            .children(|c| {
                c.names(&[
                    "version",
                    "format",
                    "class",
                    "location",
                    "object",
                    "movingWall",
                    "fixedWalls",
                    "frontAndBack",
                ])
            })
            .child(5, |wall| {
                wall.spans_lines(19, 25)
                    .child(1, |c| c.name("inGroups").detail("List<word> 1(wall)"))
            })
    });
}

#[rstest]
fn test_every_sample_is_idempotent() {
    for sample in Samples::all() {
        let first = sample.outline();
        let second = sample.outline();
        assert_eq!(first, second, "{}", sample.path().display());
    }
}
