use std::env;
use std::path::Path;

fn main() {
    // 获取项目根目录
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // 检查stocks.json是否存在
    let data_file = Path::new(&manifest_dir).join("data").join("stocks.json");
    if !data_file.exists() {
        println!("cargo:warning=data/stocks.json not found. The screener will fall back to bundled mock data.");
        println!("cargo:warning=Run 'cargo run --bin export_mock_data' to generate the data file.");
        // 文件缺失时只在脚本本身变化时重新运行
        println!("cargo:rerun-if-changed=build.rs");
    } else {
        println!("cargo:rerun-if-changed=data/stocks.json");
    }
}
