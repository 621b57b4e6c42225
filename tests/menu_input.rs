//! 메뉴 입력 처리 테스트.
use std::io::Cursor;

use tanker_fleet_toolbox::ui_cli::{read_menu_choice, MenuChoice};

#[test]
fn end_of_input_exits_menu() {
    let mut input = Cursor::new(Vec::<u8>::new());
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::Exit);

    // 잘못된 입력 뒤에 스트림이 끝나도 종료한다.
    let mut input = Cursor::new(b"x\n9\n".to_vec());
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::Exit);
}

#[test]
fn invalid_lines_are_skipped_until_a_choice() {
    let mut input = Cursor::new(b"abc\n\n 3 \n1\n".to_vec());
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::RunAnalysis);
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::SelectYear);
}
