use maze_pathfinding::prelude::*;

#[test]
fn straight_corridor() {
    let maze = "\
## ##
## ##
## ##
";
    assert_eq!(
        solve(maze),
        "\
##o##
##o##
##o##
"
    );
}

#[test]
fn weighted_detour() {
    // walking around the 9 costs 6, through it 14
    let maze = "\
# ###
# 9 #
# # #
#   #
### #
";
    assert_eq!(
        solve(maze),
        "\
#o###
#o9 #
#o# #
#ooo#
###o#
"
    );
}

#[test]
fn free_digit_is_crossed() {
    // a lone 0 is no Portal, just a cell that costs nothing to enter
    let maze = "\
# ###
# 0 #
# # #
#   #
### #
";
    assert_eq!(
        solve(maze),
        "\
#o###
#ooo#
# #o#
#  o#
###o#
"
    );
}

#[test]
fn portal_through_a_wall() {
    let maze = "\
## ##
#2  #
#####
#2  #
## ##
";
    assert_eq!(
        solve(maze),
        "\
##o##
#oo #
#####
#oo #
##o##
"
    );
}

#[test]
fn triple_digit_is_no_portal() {
    // three 5s: the lower chamber stays unreachable
    let maze = "\
## ##
#5 5#
#####
#5  #
## ##
";
    assert_eq!(solve(maze), maze);
}

#[test]
fn single_exit_is_unsolved() {
    let maze = "\
## ##
#   #
#####
";
    assert_eq!(solve(maze), maze);
}

#[test]
fn walled_off_exits_are_unsolved() {
    let maze = "\
# ##
####
## #
";
    assert_eq!(solve(maze), maze);
}

#[test]
fn degenerate_inputs_are_unsolved() {
    assert_eq!(solve(""), "");
    assert_eq!(solve("\n"), "\n");
    assert_eq!(solve("no trailing newline"), "no trailing newline");
    assert_eq!(solve("##\n###\n"), "##\n###\n");
}

#[test]
fn exits_are_picked_in_scan_order() {
    // (0, 1) and (1, 0) are the first two exits; (2, 1) is ignored
    let maze = "# #\n   \n# #\n";
    assert_eq!(solve(maze), "#o#\noo \n# #\n");
}

#[test]
fn solved_output_only_differs_on_the_path() {
    let maze = "\
## ##
#   #
## ##
";
    let solved = solve(maze);
    let changed: Vec<_> = maze
        .chars()
        .zip(solved.chars())
        .filter(|(before, after)| before != after)
        .collect();
    assert_eq!(changed, vec![(' ', 'o'); 3]);
}

#[test]
fn search_reports_the_cost() {
    let maze = Maze::parse("## ##\n#   #\n## ##\n").unwrap();
    let graph = MazeGraph::build(&maze);
    let (start, goal) = maze.exits().unwrap();
    let path = dijkstra_search(
        &graph,
        graph.node_at(start).unwrap(),
        graph.node_at(goal).unwrap(),
    )
    .unwrap();

    assert_eq!(path.cost(), 2);
    assert_eq!(path.steps(), &[(0, 2), (1, 2), (2, 2)]);
}
