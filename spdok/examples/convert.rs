use spdok::{ConvertConfig, Dia, Dok, Matrix, MatrixFormat, ParallelConvert, SparseMatrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Build a 5x4 store and export it to every format");

    let mut m = Dok::new(5, 4);
    for (row, col, value) in [
        (0, 3, 1.0),
        (1, 1, 2.0),
        (2, 2, 3.0),
        (4, 2, 4.0),
        (0, 0, 5.0),
        (1, 3, 6.0),
        (3, 3, 7.0),
    ] {
        m.try_set(row, col, value)?;
    }
    println!("Stored {} non-zeros in a {} matrix", m.nnz(), m.shape());

    for format in MatrixFormat::ALL {
        let snapshot = m.export(format);
        println!(
            "{format}: {}x{}, {} stored, at(1, 3) = {}",
            snapshot.nrows(),
            snapshot.ncols(),
            snapshot.nnz(),
            snapshot.at(1, 3)
        );
    }

    let csr = m.to_csr();
    println!("\nCSR offsets: {:?}", csr.offsets());
    println!("CSR indices: {:?}", csr.indices());
    println!("CSR values:  {:?}", csr.values());

    let csc = m.par_to_csc(&ConvertConfig::default().with_parallel_threshold(0));
    println!("\nCSC offsets: {:?}", csc.offsets());
    println!("CSC indices: {:?}", csc.indices());
    println!("CSC values:  {:?}", csc.values());

    let dia = Dia::diagonal_of(&m);
    println!("\nMain diagonal: {:?} ({} non-zero)", dia.diagonal(), dia.nnz());

    println!("\nTranspose (4x5):");
    let t = m.t();
    for row in 0..t.nrows() {
        let cells: Vec<String> = (0..t.ncols()).map(|col| format!("{:>4}", t.at(row, col))).collect();
        println!("{}", cells.join(""));
    }

    #[cfg(feature = "serde")]
    println!("\nCSR as JSON: {}", spdok::to_json(&csr)?);

    Ok(())
}
