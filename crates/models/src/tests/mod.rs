/// Entity helpers against SeaORM's mock connection
pub mod mock_tests;
