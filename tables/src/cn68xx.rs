// Licensed under the Apache-2.0 license.
//
// CN68XX hardware error report table. Generated from the CN68XX CSR
// database. Do not edit.

//! Error tree for CN68XX:
//!
//! ```text
//! CIU2_SUM_PPX_IP2(0)
//! +-- CIU2_SRC_PPX_IP2_RML(0)
//! |   +-- L2C_INT_REG
//! |   |   +-- L2C_TADX_INT(0..3)
//! |   +-- SSO_ERR
//! |   +-- PKO_REG_ERROR
//! |   +-- FPA_INT_SUM
//! |   +-- IPD_INT_SUM
//! |   +-- PIP_INT_REG
//! |   +-- TIM_REG_ERROR
//! |   +-- ZIP_INT_REG
//! |   +-- DFA_ERROR
//! |   +-- RAD_REG_ERROR
//! |   +-- KEY_INT_SUM
//! |   +-- IOB_INT_SUM
//! |   +-- SLI_INT_SUM
//! |   +-- DPI_INT_REG
//! +-- CIU2_SRC_PPX_IP2_MIO(0)
//! |   +-- MIO_BOOT_ERR
//! |   +-- MIO_RST_INT
//! +-- CIU2_SRC_PPX_IP2_MEM(0)
//! |   +-- LMCX_INT(0..3)
//! +-- CIU2_SRC_PPX_IP2_PKT(0)
//!     +-- GMXX_BAD_REG(0..4)
//!     +-- GMXX_RXX_INT_REG(0..3, 0..4)
//!     +-- GMXX_TX_INT_REG(0..4)
//!     +-- MIXX_ISR(0..1)
//!     +-- AGL_GMX_BAD_REG
//!     +-- AGL_GMX_RXX_INT_REG(0..1)
//!     +-- AGL_GMX_TX_INT_REG
//!     +-- ILK_GBL_INT
//!     +-- ILK_TXX_INT(0..1)
//!     +-- ILK_RXX_INT(0..1)
//!     +-- ILK_LNEX_INT(0..7)
//! ```

use octeon_error::RegisterType::Io64;
use octeon_error::{
    register_all, ErrorFlags, ErrorInfo, ErrorRegistry, Group, RegisterError, RegisterRef,
};
use octeon_registers::{
    agl, ciu2, dfa, dpi, fpa, gmx, ilk, iob, ipd, key, l2c, lmc, mio, mix, pip, pko, rad, sli,
    sso, tim, zip,
};

/// Every CN68XX error source descriptor, in CSR database order.
pub static ERROR_TABLE: &[ErrorInfo] = &[
    // CVMX_CIU2_SUM_PPX_IP2(0)
    ErrorInfo::summary(Io64, ciu2::sum_ppx_ip2(0), Group::Internal, 0),
    // CVMX_CIU2_SRC_PPX_IP2_RML(0)
    ErrorInfo::summary(Io64, ciu2::src_ppx_ip2_rml(0), Group::Internal, 0)
        .parent(RegisterRef::io64(ciu2::sum_ppx_ip2(0), 1 << 2 /* rml */)),
    // CVMX_CIU2_SRC_PPX_IP2_MIO(0)
    ErrorInfo::summary(Io64, ciu2::src_ppx_ip2_mio(0), Group::Internal, 0)
        .parent(RegisterRef::io64(ciu2::sum_ppx_ip2(0), 1 << 3 /* mio */)),
    // CVMX_CIU2_SRC_PPX_IP2_MEM(0)
    ErrorInfo::summary(Io64, ciu2::src_ppx_ip2_mem(0), Group::Internal, 0)
        .parent(RegisterRef::io64(ciu2::sum_ppx_ip2(0), 1 << 4 /* mem */)),
    // CVMX_CIU2_SRC_PPX_IP2_PKT(0)
    ErrorInfo::summary(Io64, ciu2::src_ppx_ip2_pkt(0), Group::Internal, 0)
        .parent(RegisterRef::io64(ciu2::sum_ppx_ip2(0), 1 << 5 /* pkt */)),
    // CVMX_L2C_INT_REG
    ErrorInfo::summary(Io64, l2c::INT_REG, Group::Internal, 0)
        .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 0, /* holerd */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[HOLERD]: Read reference to a remapped hole address\n",
    )
    .enable(l2c::INT_ENA, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 1, /* holewr */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[HOLEWR]: Write reference to a remapped hole address\n",
    )
    .enable(l2c::INT_ENA, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 2, /* vrtwr */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[VRTWR]: Virtualization memory write disallowed\n",
    )
    .enable(l2c::INT_ENA, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 3, /* vrtidrng */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[VRTIDRNG]: Virtualization ID out of range\n",
    )
    .enable(l2c::INT_ENA, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 4, /* vrtadrng */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[VRTADRNG]: Address outside of virtualization range\n",
    )
    .enable(l2c::INT_ENA, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 5, /* vrtpe */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[VRTPE]: Virtualization memory parity error\n",
    )
    .enable(l2c::INT_ENA, 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 6, /* bigwr */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[BIGWR]: Write reference past the top of memory\n",
    )
    .enable(l2c::INT_ENA, 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    ErrorInfo::bit(
        Io64,
        l2c::INT_REG,
        1 << 7, /* bigrd */
        Group::Internal,
        0,
        "ERROR L2C_INT_REG[BIGRD]: Read reference past the top of memory\n",
    )
    .enable(l2c::INT_ENA, 1 << 7)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 0 /* l2c */)),
    // CVMX_L2C_TADX_INT(0)
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 0, /* l2dsbe */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[L2DSBE]: L2D single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 1, /* l2ddbe */
        Group::Internal,
        0,
        concat!(
            "ERROR L2C_TADX_INT(0)[L2DDBE]: L2D double-bit error\n",
            "    NOTE: The cache line data is lost. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(0), 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 2, /* tagsbe */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[TAGSBE]: L2 tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 3, /* tagdbe */
        Group::Internal,
        0,
        concat!(
            "ERROR L2C_TADX_INT(0)[TAGDBE]: L2 tag double-bit error\n",
            "    NOTE: The cache state is unreliable. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(0), 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 4, /* vbfsbe */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[VBFSBE]: Victim buffer single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 4)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 5, /* vbfdbe */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[VBFDBE]: Victim buffer double-bit error\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 5)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 8, /* noway */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[NOWAY]: No way was available for allocation\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 8)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 9, /* rddislmc */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[RDDISLMC]: Read to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 9)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 10, /* wrdislmc */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[WRDISLMC]: Write to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 10)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 11, /* rtgsbe */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[RTGSBE]: Remote tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 11)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(0),
        1 << 12, /* rtgdbe */
        Group::Internal,
        0,
        "ERROR L2C_TADX_INT(0)[RTGDBE]: Remote tag double-bit error\n",
    )
    .enable(l2c::tadx_ien(0), 1 << 12)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 16 /* tad0 */)),
    // CVMX_L2C_TADX_INT(1)
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 0, /* l2dsbe */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[L2DSBE]: L2D single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 1, /* l2ddbe */
        Group::Internal,
        1,
        concat!(
            "ERROR L2C_TADX_INT(1)[L2DDBE]: L2D double-bit error\n",
            "    NOTE: The cache line data is lost. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(1), 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 2, /* tagsbe */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[TAGSBE]: L2 tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 3, /* tagdbe */
        Group::Internal,
        1,
        concat!(
            "ERROR L2C_TADX_INT(1)[TAGDBE]: L2 tag double-bit error\n",
            "    NOTE: The cache state is unreliable. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(1), 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 4, /* vbfsbe */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[VBFSBE]: Victim buffer single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 4)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 5, /* vbfdbe */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[VBFDBE]: Victim buffer double-bit error\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 5)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 8, /* noway */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[NOWAY]: No way was available for allocation\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 8)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 9, /* rddislmc */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[RDDISLMC]: Read to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 9)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 10, /* wrdislmc */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[WRDISLMC]: Write to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 10)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 11, /* rtgsbe */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[RTGSBE]: Remote tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 11)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(1),
        1 << 12, /* rtgdbe */
        Group::Internal,
        1,
        "ERROR L2C_TADX_INT(1)[RTGDBE]: Remote tag double-bit error\n",
    )
    .enable(l2c::tadx_ien(1), 1 << 12)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 17 /* tad1 */)),
    // CVMX_L2C_TADX_INT(2)
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 0, /* l2dsbe */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[L2DSBE]: L2D single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 1, /* l2ddbe */
        Group::Internal,
        2,
        concat!(
            "ERROR L2C_TADX_INT(2)[L2DDBE]: L2D double-bit error\n",
            "    NOTE: The cache line data is lost. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(2), 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 2, /* tagsbe */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[TAGSBE]: L2 tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 3, /* tagdbe */
        Group::Internal,
        2,
        concat!(
            "ERROR L2C_TADX_INT(2)[TAGDBE]: L2 tag double-bit error\n",
            "    NOTE: The cache state is unreliable. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(2), 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 4, /* vbfsbe */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[VBFSBE]: Victim buffer single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 4)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 5, /* vbfdbe */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[VBFDBE]: Victim buffer double-bit error\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 5)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 8, /* noway */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[NOWAY]: No way was available for allocation\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 8)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 9, /* rddislmc */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[RDDISLMC]: Read to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 9)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 10, /* wrdislmc */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[WRDISLMC]: Write to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 10)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 11, /* rtgsbe */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[RTGSBE]: Remote tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 11)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(2),
        1 << 12, /* rtgdbe */
        Group::Internal,
        2,
        "ERROR L2C_TADX_INT(2)[RTGDBE]: Remote tag double-bit error\n",
    )
    .enable(l2c::tadx_ien(2), 1 << 12)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 18 /* tad2 */)),
    // CVMX_L2C_TADX_INT(3)
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 0, /* l2dsbe */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[L2DSBE]: L2D single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 1, /* l2ddbe */
        Group::Internal,
        3,
        concat!(
            "ERROR L2C_TADX_INT(3)[L2DDBE]: L2D double-bit error\n",
            "    NOTE: The cache line data is lost. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(3), 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 2, /* tagsbe */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[TAGSBE]: L2 tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 3, /* tagdbe */
        Group::Internal,
        3,
        concat!(
            "ERROR L2C_TADX_INT(3)[TAGDBE]: L2 tag double-bit error\n",
            "    NOTE: The cache state is unreliable. HW reset required.\n",
        ),
    )
    .enable(l2c::tadx_ien(3), 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 4, /* vbfsbe */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[VBFSBE]: Victim buffer single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 4)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 5, /* vbfdbe */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[VBFDBE]: Victim buffer double-bit error\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 5)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 8, /* noway */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[NOWAY]: No way was available for allocation\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 8)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 9, /* rddislmc */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[RDDISLMC]: Read to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 9)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 10, /* wrdislmc */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[WRDISLMC]: Write to a disabled memory controller\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 10)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 11, /* rtgsbe */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[RTGSBE]: Remote tag single-bit error (corrected)\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 11)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    ErrorInfo::bit(
        Io64,
        l2c::tadx_int(3),
        1 << 12, /* rtgdbe */
        Group::Internal,
        3,
        "ERROR L2C_TADX_INT(3)[RTGDBE]: Remote tag double-bit error\n",
    )
    .enable(l2c::tadx_ien(3), 1 << 12)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(l2c::INT_REG, 1 << 19 /* tad3 */)),
    // CVMX_SSO_ERR
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 0, /* idx_sbe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[IDX_SBE]: Index memory single-bit error (corrected)\n",
    )
    .enable(sso::ERR_ENB, 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 1, /* idx_dbe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[IDX_DBE]: Index memory double-bit error\n",
    )
    .enable(sso::ERR_ENB, 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 2, /* fidx_sbe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[FIDX_SBE]: Forward index memory single-bit error (corrected)\n",
    )
    .enable(sso::ERR_ENB, 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 3, /* fidx_dbe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[FIDX_DBE]: Forward index memory double-bit error\n",
    )
    .enable(sso::ERR_ENB, 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 4, /* pnd_sbe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[PND_SBE]: Pending switch memory single-bit error (corrected)\n",
    )
    .enable(sso::ERR_ENB, 1 << 4)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 5, /* pnd_dbe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[PND_DBE]: Pending switch memory double-bit error\n",
    )
    .enable(sso::ERR_ENB, 1 << 5)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 12, /* fpe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[FPE]: Work slot freed when not allocated\n",
    )
    .enable(sso::ERR_ENB, 1 << 12)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 13, /* awe */
        Group::Internal,
        0,
        "ERROR SSO_ERR[AWE]: Work added to an out-of-range group\n",
    )
    .enable(sso::ERR_ENB, 1 << 13)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    ErrorInfo::bit(
        Io64,
        sso::ERR,
        1 << 14, /* iop */
        Group::Internal,
        0,
        "ERROR SSO_ERR[IOP]: Illegal operation received\n",
    )
    .enable(sso::ERR_ENB, 1 << 14)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 1 /* sso */)),
    // CVMX_PKO_REG_ERROR
    ErrorInfo::bit(
        Io64,
        pko::REG_ERROR,
        1 << 0, /* parity */
        Group::Internal,
        0,
        "ERROR PKO_REG_ERROR[PARITY]: Read parity error at the port data buffer\n",
    )
    .enable(pko::REG_INT_MASK, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 2 /* pko */)),
    ErrorInfo::bit(
        Io64,
        pko::REG_ERROR,
        1 << 1, /* doorbell */
        Group::Internal,
        0,
        "ERROR PKO_REG_ERROR[DOORBELL]: A doorbell count has overflowed\n",
    )
    .enable(pko::REG_INT_MASK, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 2 /* pko */)),
    ErrorInfo::bit(
        Io64,
        pko::REG_ERROR,
        1 << 2, /* currzero */
        Group::Internal,
        0,
        "ERROR PKO_REG_ERROR[CURRZERO]: A packet data pointer has become zero\n",
    )
    .enable(pko::REG_INT_MASK, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 2 /* pko */)),
    // CVMX_FPA_INT_SUM
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 0, /* fed0_sbe */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[FED0_SBE]: Memory 0 single-bit error (corrected)\n",
    )
    .enable(fpa::INT_ENB, 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 1, /* fed0_dbe */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[FED0_DBE]: Memory 0 double-bit error\n",
    )
    .enable(fpa::INT_ENB, 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 2, /* fed1_sbe */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[FED1_SBE]: Memory 1 single-bit error (corrected)\n",
    )
    .enable(fpa::INT_ENB, 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 3, /* fed1_dbe */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[FED1_DBE]: Memory 1 double-bit error\n",
    )
    .enable(fpa::INT_ENB, 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 4, /* q0_und */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[Q0_UND]: Queue 0 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 5, /* q0_coff */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[Q0_COFF]: Queue 0 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 6, /* q0_perr */
        Group::Internal,
        0,
        "ERROR FPA_INT_SUM[Q0_PERR]: Queue 0 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 7, /* q1_und */
        Group::Internal,
        1,
        "ERROR FPA_INT_SUM[Q1_UND]: Queue 1 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 7)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 8, /* q1_coff */
        Group::Internal,
        1,
        "ERROR FPA_INT_SUM[Q1_COFF]: Queue 1 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 9, /* q1_perr */
        Group::Internal,
        1,
        "ERROR FPA_INT_SUM[Q1_PERR]: Queue 1 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 9)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 10, /* q2_und */
        Group::Internal,
        2,
        "ERROR FPA_INT_SUM[Q2_UND]: Queue 2 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 11, /* q2_coff */
        Group::Internal,
        2,
        "ERROR FPA_INT_SUM[Q2_COFF]: Queue 2 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 11)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 12, /* q2_perr */
        Group::Internal,
        2,
        "ERROR FPA_INT_SUM[Q2_PERR]: Queue 2 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 12)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 13, /* q3_und */
        Group::Internal,
        3,
        "ERROR FPA_INT_SUM[Q3_UND]: Queue 3 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 13)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 14, /* q3_coff */
        Group::Internal,
        3,
        "ERROR FPA_INT_SUM[Q3_COFF]: Queue 3 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 14)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 15, /* q3_perr */
        Group::Internal,
        3,
        "ERROR FPA_INT_SUM[Q3_PERR]: Queue 3 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 15)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 16, /* q4_und */
        Group::Internal,
        4,
        "ERROR FPA_INT_SUM[Q4_UND]: Queue 4 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 16)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 17, /* q4_coff */
        Group::Internal,
        4,
        "ERROR FPA_INT_SUM[Q4_COFF]: Queue 4 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 17)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 18, /* q4_perr */
        Group::Internal,
        4,
        "ERROR FPA_INT_SUM[Q4_PERR]: Queue 4 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 18)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 19, /* q5_und */
        Group::Internal,
        5,
        "ERROR FPA_INT_SUM[Q5_UND]: Queue 5 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 19)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 20, /* q5_coff */
        Group::Internal,
        5,
        "ERROR FPA_INT_SUM[Q5_COFF]: Queue 5 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 21, /* q5_perr */
        Group::Internal,
        5,
        "ERROR FPA_INT_SUM[Q5_PERR]: Queue 5 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 22, /* q6_und */
        Group::Internal,
        6,
        "ERROR FPA_INT_SUM[Q6_UND]: Queue 6 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 22)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 23, /* q6_coff */
        Group::Internal,
        6,
        "ERROR FPA_INT_SUM[Q6_COFF]: Queue 6 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 23)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 24, /* q6_perr */
        Group::Internal,
        6,
        "ERROR FPA_INT_SUM[Q6_PERR]: Queue 6 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 24)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 25, /* q7_und */
        Group::Internal,
        7,
        "ERROR FPA_INT_SUM[Q7_UND]: Queue 7 page count went negative\n",
    )
    .enable(fpa::INT_ENB, 1 << 25)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 26, /* q7_coff */
        Group::Internal,
        7,
        "ERROR FPA_INT_SUM[Q7_COFF]: Queue 7 page count incremented past the maximum\n",
    )
    .enable(fpa::INT_ENB, 1 << 26)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    ErrorInfo::bit(
        Io64,
        fpa::INT_SUM,
        1 << 27, /* q7_perr */
        Group::Internal,
        7,
        "ERROR FPA_INT_SUM[Q7_PERR]: Queue 7 pointer read with invalid parity\n",
    )
    .enable(fpa::INT_ENB, 1 << 27)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 3 /* fpa */)),
    // CVMX_IPD_INT_SUM
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 0, /* prc_par0 */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[PRC_PAR0]: Packet memory parity error, bits 31:0\n",
    )
    .enable(ipd::INT_ENB, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 1, /* prc_par1 */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[PRC_PAR1]: Packet memory parity error, bits 63:32\n",
    )
    .enable(ipd::INT_ENB, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 2, /* prc_par2 */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[PRC_PAR2]: Packet memory parity error, bits 95:64\n",
    )
    .enable(ipd::INT_ENB, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 3, /* prc_par3 */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[PRC_PAR3]: Packet memory parity error, bits 127:96\n",
    )
    .enable(ipd::INT_ENB, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 4, /* bp_sub */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[BP_SUB]: Backpressure subtract with an illegal value\n",
    )
    .enable(ipd::INT_ENB, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 5, /* dc_ovr */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[DC_OVR]: Data credit counter overflowed\n",
    )
    .enable(ipd::INT_ENB, 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 6, /* cc_ovr */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[CC_OVR]: Command credit counter overflowed\n",
    )
    .enable(ipd::INT_ENB, 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 7, /* c_coll */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[C_COLL]: Packet and work queue commands collided\n",
    )
    .enable(ipd::INT_ENB, 1 << 7)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 8, /* d_coll */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[D_COLL]: Packet and work queue data collided\n",
    )
    .enable(ipd::INT_ENB, 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 9, /* bc_ovr */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[BC_OVR]: Byte count to send to IOB overflowed\n",
    )
    .enable(ipd::INT_ENB, 1 << 9)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 10, /* pq_sub */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[PQ_SUB]: Per-port QOS subtract irregularity\n",
    )
    .enable(ipd::INT_ENB, 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    ErrorInfo::bit(
        Io64,
        ipd::INT_SUM,
        1 << 11, /* pq_add */
        Group::Internal,
        0,
        "ERROR IPD_INT_SUM[PQ_ADD]: Per-port QOS add irregularity\n",
    )
    .enable(ipd::INT_ENB, 1 << 11)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 4 /* ipd */)),
    // CVMX_PIP_INT_REG
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 3, /* prtnxa */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[PRTNXA]: Packet received for a non-existent port\n",
    )
    .enable(pip::INT_EN, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 4, /* badtag */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[BADTAG]: A bad tag was sent from IPD\n",
    )
    .enable(pip::INT_EN, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 5, /* skprunt */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[SKPRUNT]: Packet was terminated during the skip stage\n",
    )
    .enable(pip::INT_EN, 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 6, /* todoovr */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[TODOOVR]: Todo list overflowed\n",
    )
    .enable(pip::INT_EN, 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 7, /* feperr */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[FEPERR]: Front-end memory parity error\n",
    )
    .enable(pip::INT_EN, 1 << 7)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 8, /* beperr */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[BEPERR]: Back-end memory parity error\n",
    )
    .enable(pip::INT_EN, 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    ErrorInfo::bit(
        Io64,
        pip::INT_REG,
        1 << 12, /* punyerr */
        Group::Internal,
        0,
        "ERROR PIP_INT_REG[PUNYERR]: Frame was smaller than one byte after FCS strip\n",
    )
    .enable(pip::INT_EN, 1 << 12)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 5 /* pip */)),
    // CVMX_TIM_REG_ERROR
    ErrorInfo::bit(
        Io64,
        tim::REG_ERROR,
        0xffff, /* mask */
        Group::Internal,
        0,
        "ERROR TIM_REG_ERROR[MASK]: A timer bucket ring overflowed, one bit per ring\n",
    )
    .enable(tim::REG_INT_MASK, 0xffff)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 6 /* tim */)),
    // CVMX_ZIP_INT_REG
    ErrorInfo::bit(
        Io64,
        zip::INT_REG,
        1 << 0, /* iddecode */
        Group::Internal,
        0,
        "ERROR ZIP_INT_REG[IDDECODE]: Illegal instruction decoded\n",
    )
    .enable(zip::INT_MASK, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 7 /* zip */)),
    ErrorInfo::bit(
        Io64,
        zip::INT_REG,
        1 << 1, /* fife */
        Group::Internal,
        0,
        "ERROR ZIP_INT_REG[FIFE]: Instruction FIFO overflowed\n",
    )
    .enable(zip::INT_MASK, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 7 /* zip */)),
    ErrorInfo::bit(
        Io64,
        zip::INT_REG,
        1 << 2, /* doorbell */
        Group::Internal,
        0,
        "ERROR ZIP_INT_REG[DOORBELL]: A doorbell count has overflowed\n",
    )
    .enable(zip::INT_MASK, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 7 /* zip */)),
    // CVMX_DFA_ERROR
    ErrorInfo::bit(
        Io64,
        dfa::ERROR,
        1 << 0, /* dblovf */
        Group::Internal,
        0,
        "ERROR DFA_ERROR[DBLOVF]: A doorbell count has overflowed\n",
    )
    .enable(dfa::INT_MSK, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 8 /* dfa */)),
    ErrorInfo::bit(
        Io64,
        dfa::ERROR,
        1 << 1, /* dc0perr */
        Group::Internal,
        0,
        "ERROR DFA_ERROR[DC0PERR]: Node cache parity error, cluster 0\n",
    )
    .enable(dfa::INT_MSK, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 8 /* dfa */)),
    ErrorInfo::bit(
        Io64,
        dfa::ERROR,
        1 << 2, /* dc1perr */
        Group::Internal,
        0,
        "ERROR DFA_ERROR[DC1PERR]: Node cache parity error, cluster 1\n",
    )
    .enable(dfa::INT_MSK, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 8 /* dfa */)),
    ErrorInfo::bit(
        Io64,
        dfa::ERROR,
        1 << 3, /* dc2perr */
        Group::Internal,
        0,
        "ERROR DFA_ERROR[DC2PERR]: Node cache parity error, cluster 2\n",
    )
    .enable(dfa::INT_MSK, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 8 /* dfa */)),
    ErrorInfo::bit(
        Io64,
        dfa::ERROR,
        1 << 4, /* replerr */
        Group::Internal,
        0,
        "ERROR DFA_ERROR[REPLERR]: Illegal replication field in an instruction\n",
    )
    .enable(dfa::INT_MSK, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 8 /* dfa */)),
    // CVMX_RAD_REG_ERROR
    ErrorInfo::bit(
        Io64,
        rad::REG_ERROR,
        1 << 0, /* doorbell */
        Group::Internal,
        0,
        "ERROR RAD_REG_ERROR[DOORBELL]: A doorbell count has overflowed\n",
    )
    .enable(rad::REG_INT_MASK, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 9 /* rad */)),
    // CVMX_KEY_INT_SUM
    ErrorInfo::bit(
        Io64,
        key::INT_SUM,
        1 << 0, /* ked0_sbe */
        Group::Internal,
        0,
        "ERROR KEY_INT_SUM[KED0_SBE]: Key memory 0 single-bit error (corrected)\n",
    )
    .enable(key::INT_ENB, 1 << 0)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 10 /* key */)),
    ErrorInfo::bit(
        Io64,
        key::INT_SUM,
        1 << 1, /* ked0_dbe */
        Group::Internal,
        0,
        "ERROR KEY_INT_SUM[KED0_DBE]: Key memory 0 double-bit error\n",
    )
    .enable(key::INT_ENB, 1 << 1)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 10 /* key */)),
    ErrorInfo::bit(
        Io64,
        key::INT_SUM,
        1 << 2, /* ked1_sbe */
        Group::Internal,
        0,
        "ERROR KEY_INT_SUM[KED1_SBE]: Key memory 1 single-bit error (corrected)\n",
    )
    .enable(key::INT_ENB, 1 << 2)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 10 /* key */)),
    ErrorInfo::bit(
        Io64,
        key::INT_SUM,
        1 << 3, /* ked1_dbe */
        Group::Internal,
        0,
        "ERROR KEY_INT_SUM[KED1_DBE]: Key memory 1 double-bit error\n",
    )
    .enable(key::INT_ENB, 1 << 3)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 10 /* key */)),
    // CVMX_IOB_INT_SUM
    ErrorInfo::bit(
        Io64,
        iob::INT_SUM,
        1 << 0, /* np_sop */
        Group::Internal,
        0,
        "ERROR IOB_INT_SUM[NP_SOP]: Missing SOP for a non-passthrough port\n",
    )
    .enable(iob::INT_ENB, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 11 /* iob */)),
    ErrorInfo::bit(
        Io64,
        iob::INT_SUM,
        1 << 1, /* np_eop */
        Group::Internal,
        0,
        "ERROR IOB_INT_SUM[NP_EOP]: Missing EOP for a non-passthrough port\n",
    )
    .enable(iob::INT_ENB, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 11 /* iob */)),
    ErrorInfo::bit(
        Io64,
        iob::INT_SUM,
        1 << 2, /* p_sop */
        Group::Internal,
        0,
        "ERROR IOB_INT_SUM[P_SOP]: Missing SOP for a passthrough port\n",
    )
    .enable(iob::INT_ENB, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 11 /* iob */)),
    ErrorInfo::bit(
        Io64,
        iob::INT_SUM,
        1 << 3, /* p_eop */
        Group::Internal,
        0,
        "ERROR IOB_INT_SUM[P_EOP]: Missing EOP for a passthrough port\n",
    )
    .enable(iob::INT_ENB, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 11 /* iob */)),
    ErrorInfo::bit(
        Io64,
        iob::INT_SUM,
        1 << 4, /* np_dat */
        Group::Internal,
        0,
        "ERROR IOB_INT_SUM[NP_DAT]: Data arrived before SOP for a non-passthrough port\n",
    )
    .enable(iob::INT_ENB, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 11 /* iob */)),
    ErrorInfo::bit(
        Io64,
        iob::INT_SUM,
        1 << 5, /* p_dat */
        Group::Internal,
        0,
        "ERROR IOB_INT_SUM[P_DAT]: Data arrived before SOP for a passthrough port\n",
    )
    .enable(iob::INT_ENB, 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 11 /* iob */)),
    // CVMX_SLI_INT_SUM
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 0, /* rml_to */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[RML_TO]: A read to the RML did not return in time\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 2, /* bar0_to */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[BAR0_TO]: A BAR0 access timed out\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 3, /* iob2big */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[IOB2BIG]: An IOB transfer was too large\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 4, /* pidbof */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[PIDBOF]: Packet instruction doorbell count overflowed\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 5, /* psldbof */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[PSLDBOF]: Packet scatter-list doorbell count overflowed\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 6, /* pout_err */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[POUT_ERR]: Packet out interrupt error\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    ErrorInfo::bit(
        Io64,
        sli::INT_SUM,
        1 << 7, /* pins_err */
        Group::Internal,
        0,
        "ERROR SLI_INT_SUM[PINS_ERR]: A packet instruction read failed to complete\n",
    )
    .enable(sli::INT_ENB_CIU, 1 << 7)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 12 /* sli */)),
    // CVMX_DPI_INT_REG
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 0, /* nderr */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[NDERR]: NCB decode error\n",
    )
    .enable(dpi::INT_EN, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 1, /* nfovr */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[NFOVR]: CSR FIFO overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 8, /* dmadbo0 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO0]: DMA queue 0 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 9, /* dmadbo1 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO1]: DMA queue 1 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 9)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 10, /* dmadbo2 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO2]: DMA queue 2 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 11, /* dmadbo3 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO3]: DMA queue 3 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 11)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 12, /* dmadbo4 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO4]: DMA queue 4 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 12)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 13, /* dmadbo5 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO5]: DMA queue 5 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 13)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 14, /* dmadbo6 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO6]: DMA queue 6 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 14)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 15, /* dmadbo7 */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[DMADBO7]: DMA queue 7 doorbell count overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 15)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 16, /* req_badadr */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_BADADR]: Instruction fetch from an illegal address\n",
    )
    .enable(dpi::INT_EN, 1 << 16)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 17, /* req_badlen */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_BADLEN]: Instruction fetch with an illegal length\n",
    )
    .enable(dpi::INT_EN, 1 << 17)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 18, /* req_ovrflw */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_OVRFLW]: Instruction FIFO overflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 18)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 19, /* req_undflw */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_UNDFLW]: Instruction FIFO underflowed\n",
    )
    .enable(dpi::INT_EN, 1 << 19)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 20, /* req_anull */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_ANULL]: Instruction filled with a bubble\n",
    )
    .enable(dpi::INT_EN, 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 21, /* req_inull */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_INULL]: Instruction with a null pointer\n",
    )
    .enable(dpi::INT_EN, 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 22, /* req_badfil */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[REQ_BADFIL]: Instruction unexpected fill\n",
    )
    .enable(dpi::INT_EN, 1 << 22)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 24, /* sprt0_rst */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[SPRT0_RST]: Packet transfer while port 0 was in reset\n",
    )
    .enable(dpi::INT_EN, 1 << 24)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    ErrorInfo::bit(
        Io64,
        dpi::INT_REG,
        1 << 25, /* sprt1_rst */
        Group::Internal,
        0,
        "ERROR DPI_INT_REG[SPRT1_RST]: Packet transfer while port 1 was in reset\n",
    )
    .enable(dpi::INT_EN, 1 << 25)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_rml(0), 1 << 13 /* dpi */)),
    // CVMX_MIO_BOOT_ERR
    ErrorInfo::bit(
        Io64,
        mio::BOOT_ERR,
        1 << 0, /* adr_err */
        Group::Internal,
        0,
        "ERROR MIO_BOOT_ERR[ADR_ERR]: Boot bus address decode error\n",
    )
    .enable(mio::BOOT_INT, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mio(0), 1 << 0 /* boot */)),
    ErrorInfo::bit(
        Io64,
        mio::BOOT_ERR,
        1 << 1, /* wait_err */
        Group::Internal,
        0,
        "ERROR MIO_BOOT_ERR[WAIT_ERR]: Boot bus wait mode error\n",
    )
    .enable(mio::BOOT_INT, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mio(0), 1 << 0 /* boot */)),
    // CVMX_MIO_RST_INT
    ErrorInfo::bit(
        Io64,
        mio::RST_INT,
        1 << 0, /* rst_link0 */
        Group::Internal,
        0,
        "ERROR MIO_RST_INT[RST_LINK0]: MAC 0 link-down reset request\n",
    )
    .enable(mio::RST_INT_EN, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mio(0), 1 << 1 /* rst */)),
    ErrorInfo::bit(
        Io64,
        mio::RST_INT,
        1 << 1, /* rst_link1 */
        Group::Internal,
        0,
        "ERROR MIO_RST_INT[RST_LINK1]: MAC 1 link-down reset request\n",
    )
    .enable(mio::RST_INT_EN, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mio(0), 1 << 1 /* rst */)),
    ErrorInfo::bit(
        Io64,
        mio::RST_INT,
        1 << 8, /* perst0 */
        Group::Internal,
        0,
        "ERROR MIO_RST_INT[PERST0]: PERST0_L pin asserted\n",
    )
    .enable(mio::RST_INT_EN, 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mio(0), 1 << 1 /* rst */)),
    ErrorInfo::bit(
        Io64,
        mio::RST_INT,
        1 << 9, /* perst1 */
        Group::Internal,
        0,
        "ERROR MIO_RST_INT[PERST1]: PERST1_L pin asserted\n",
    )
    .enable(mio::RST_INT_EN, 1 << 9)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mio(0), 1 << 1 /* rst */)),
    // CVMX_LMCX_INT(0)
    ErrorInfo::bit(
        Io64,
        lmc::intx(0),
        1 << 0, /* nxm_wr_err */
        Group::Lmc,
        0,
        "ERROR LMCX_INT(0)[NXM_WR_ERR]: Write to nonexistent memory\n",
    )
    .enable(lmc::intx_en(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 0 /* ddr0 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(0),
        0xf << 1, /* sec_err */
        Group::Lmc,
        0,
        "ERROR LMCX_INT(0)[SEC_ERR]: Single-bit error on a DRAM read (corrected), one bit per cacheline chunk\n",
    )
    .enable(lmc::intx_en(0), 1 << 1)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 0 /* ddr0 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(0),
        0xf << 5, /* ded_err */
        Group::Lmc,
        0,
        concat!(
            "ERROR LMCX_INT(0)[DED_ERR]: Double-bit error on a DRAM read, one bit per cacheline chunk\n",
            "    NOTE: The read data is lost. HW reset required.\n",
        ),
    )
    .enable(lmc::intx_en(0), 1 << 2)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 0 /* ddr0 */)),
    // CVMX_LMCX_INT(1)
    ErrorInfo::bit(
        Io64,
        lmc::intx(1),
        1 << 0, /* nxm_wr_err */
        Group::Lmc,
        1,
        "ERROR LMCX_INT(1)[NXM_WR_ERR]: Write to nonexistent memory\n",
    )
    .enable(lmc::intx_en(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 1 /* ddr1 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(1),
        0xf << 1, /* sec_err */
        Group::Lmc,
        1,
        "ERROR LMCX_INT(1)[SEC_ERR]: Single-bit error on a DRAM read (corrected), one bit per cacheline chunk\n",
    )
    .enable(lmc::intx_en(1), 1 << 1)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 1 /* ddr1 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(1),
        0xf << 5, /* ded_err */
        Group::Lmc,
        1,
        concat!(
            "ERROR LMCX_INT(1)[DED_ERR]: Double-bit error on a DRAM read, one bit per cacheline chunk\n",
            "    NOTE: The read data is lost. HW reset required.\n",
        ),
    )
    .enable(lmc::intx_en(1), 1 << 2)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 1 /* ddr1 */)),
    // CVMX_LMCX_INT(2)
    ErrorInfo::bit(
        Io64,
        lmc::intx(2),
        1 << 0, /* nxm_wr_err */
        Group::Lmc,
        2,
        "ERROR LMCX_INT(2)[NXM_WR_ERR]: Write to nonexistent memory\n",
    )
    .enable(lmc::intx_en(2), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 2 /* ddr2 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(2),
        0xf << 1, /* sec_err */
        Group::Lmc,
        2,
        "ERROR LMCX_INT(2)[SEC_ERR]: Single-bit error on a DRAM read (corrected), one bit per cacheline chunk\n",
    )
    .enable(lmc::intx_en(2), 1 << 1)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 2 /* ddr2 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(2),
        0xf << 5, /* ded_err */
        Group::Lmc,
        2,
        concat!(
            "ERROR LMCX_INT(2)[DED_ERR]: Double-bit error on a DRAM read, one bit per cacheline chunk\n",
            "    NOTE: The read data is lost. HW reset required.\n",
        ),
    )
    .enable(lmc::intx_en(2), 1 << 2)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 2 /* ddr2 */)),
    // CVMX_LMCX_INT(3)
    ErrorInfo::bit(
        Io64,
        lmc::intx(3),
        1 << 0, /* nxm_wr_err */
        Group::Lmc,
        3,
        "ERROR LMCX_INT(3)[NXM_WR_ERR]: Write to nonexistent memory\n",
    )
    .enable(lmc::intx_en(3), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 3 /* ddr3 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(3),
        0xf << 1, /* sec_err */
        Group::Lmc,
        3,
        "ERROR LMCX_INT(3)[SEC_ERR]: Single-bit error on a DRAM read (corrected), one bit per cacheline chunk\n",
    )
    .enable(lmc::intx_en(3), 1 << 1)
    .flags(ErrorFlags::ECC_SINGLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 3 /* ddr3 */)),
    ErrorInfo::bit(
        Io64,
        lmc::intx(3),
        0xf << 5, /* ded_err */
        Group::Lmc,
        3,
        concat!(
            "ERROR LMCX_INT(3)[DED_ERR]: Double-bit error on a DRAM read, one bit per cacheline chunk\n",
            "    NOTE: The read data is lost. HW reset required.\n",
        ),
    )
    .enable(lmc::intx_en(3), 1 << 2)
    .flags(ErrorFlags::ECC_DOUBLE_BIT)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_mem(0), 1 << 3 /* ddr3 */)),
    // CVMX_GMXX_BAD_REG(0)
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(0),
        0xffff << 2, /* out_ovr */
        Group::Ethernet,
        0,
        "ERROR GMXX_BAD_REG(0)[OUT_OVR]: Outbound data FIFO overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(0),
        0xf << 22, /* loststat */
        Group::Ethernet,
        0,
        "ERROR GMXX_BAD_REG(0)[LOSTSTAT]: TX statistics counter overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(0),
        1 << 26, /* statovr */
        Group::Ethernet,
        0,
        "ERROR GMXX_BAD_REG(0)[STATOVR]: RX statistics FIFO overflowed\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(0),
        0xf << 27, /* inb_nxa */
        Group::Ethernet,
        0,
        "ERROR GMXX_BAD_REG(0)[INB_NXA]: Inbound port address out of range\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    // CVMX_GMXX_RXX_INT_REG(0,0)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 0),
        1 << 1, /* carext */
        Group::Ethernet,
        0,
        "ERROR GMXX_RXX_INT_REG(0,0)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(0, 0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 0),
        1 << 8, /* skperr */
        Group::Ethernet,
        0,
        "ERROR GMXX_RXX_INT_REG(0,0)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(0, 0), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 0),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        0,
        "ERROR GMXX_RXX_INT_REG(0,0)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(0, 0), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 0),
        1 << 20, /* pcterr */
        Group::Ethernet,
        0,
        "ERROR GMXX_RXX_INT_REG(0,0)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 0), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 0),
        1 << 21, /* rsverr */
        Group::Ethernet,
        0,
        "ERROR GMXX_RXX_INT_REG(0,0)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 0), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    // CVMX_GMXX_RXX_INT_REG(1,0)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 0),
        1 << 1, /* carext */
        Group::Ethernet,
        1,
        "ERROR GMXX_RXX_INT_REG(1,0)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(1, 0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 0),
        1 << 8, /* skperr */
        Group::Ethernet,
        1,
        "ERROR GMXX_RXX_INT_REG(1,0)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(1, 0), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 0),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        1,
        "ERROR GMXX_RXX_INT_REG(1,0)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(1, 0), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 0),
        1 << 20, /* pcterr */
        Group::Ethernet,
        1,
        "ERROR GMXX_RXX_INT_REG(1,0)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 0), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 0),
        1 << 21, /* rsverr */
        Group::Ethernet,
        1,
        "ERROR GMXX_RXX_INT_REG(1,0)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 0), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    // CVMX_GMXX_RXX_INT_REG(2,0)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 0),
        1 << 1, /* carext */
        Group::Ethernet,
        2,
        "ERROR GMXX_RXX_INT_REG(2,0)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(2, 0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 0),
        1 << 8, /* skperr */
        Group::Ethernet,
        2,
        "ERROR GMXX_RXX_INT_REG(2,0)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(2, 0), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 0),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        2,
        "ERROR GMXX_RXX_INT_REG(2,0)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(2, 0), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 0),
        1 << 20, /* pcterr */
        Group::Ethernet,
        2,
        "ERROR GMXX_RXX_INT_REG(2,0)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 0), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 0),
        1 << 21, /* rsverr */
        Group::Ethernet,
        2,
        "ERROR GMXX_RXX_INT_REG(2,0)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 0), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    // CVMX_GMXX_RXX_INT_REG(3,0)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 0),
        1 << 1, /* carext */
        Group::Ethernet,
        3,
        "ERROR GMXX_RXX_INT_REG(3,0)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(3, 0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 0),
        1 << 8, /* skperr */
        Group::Ethernet,
        3,
        "ERROR GMXX_RXX_INT_REG(3,0)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(3, 0), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 0),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        3,
        "ERROR GMXX_RXX_INT_REG(3,0)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(3, 0), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 0),
        1 << 20, /* pcterr */
        Group::Ethernet,
        3,
        "ERROR GMXX_RXX_INT_REG(3,0)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 0), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 0),
        1 << 21, /* rsverr */
        Group::Ethernet,
        3,
        "ERROR GMXX_RXX_INT_REG(3,0)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 0), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    // CVMX_GMXX_TX_INT_REG(0)
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(0),
        1 << 0, /* pko_nxa */
        Group::Ethernet,
        0,
        "ERROR GMXX_TX_INT_REG(0)[PKO_NXA]: PKO request to a non-existent port\n",
    )
    .enable(gmx::tx_int_en(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(0),
        0xf << 2, /* undflw */
        Group::Ethernet,
        0,
        "ERROR GMXX_TX_INT_REG(0)[UNDFLW]: TX underflow, one bit per port\n",
    )
    .enable(gmx::tx_int_en(0), 0xf << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 0 /* gmx0 */)),
    // CVMX_GMXX_BAD_REG(1)
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(1),
        0xffff << 2, /* out_ovr */
        Group::Ethernet,
        16,
        "ERROR GMXX_BAD_REG(1)[OUT_OVR]: Outbound data FIFO overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(1),
        0xf << 22, /* loststat */
        Group::Ethernet,
        16,
        "ERROR GMXX_BAD_REG(1)[LOSTSTAT]: TX statistics counter overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(1),
        1 << 26, /* statovr */
        Group::Ethernet,
        16,
        "ERROR GMXX_BAD_REG(1)[STATOVR]: RX statistics FIFO overflowed\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(1),
        0xf << 27, /* inb_nxa */
        Group::Ethernet,
        16,
        "ERROR GMXX_BAD_REG(1)[INB_NXA]: Inbound port address out of range\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    // CVMX_GMXX_RXX_INT_REG(0,1)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 1),
        1 << 1, /* carext */
        Group::Ethernet,
        16,
        "ERROR GMXX_RXX_INT_REG(0,1)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(0, 1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 1),
        1 << 8, /* skperr */
        Group::Ethernet,
        16,
        "ERROR GMXX_RXX_INT_REG(0,1)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(0, 1), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 1),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        16,
        "ERROR GMXX_RXX_INT_REG(0,1)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(0, 1), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 1),
        1 << 20, /* pcterr */
        Group::Ethernet,
        16,
        "ERROR GMXX_RXX_INT_REG(0,1)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 1), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 1),
        1 << 21, /* rsverr */
        Group::Ethernet,
        16,
        "ERROR GMXX_RXX_INT_REG(0,1)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 1), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    // CVMX_GMXX_RXX_INT_REG(1,1)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 1),
        1 << 1, /* carext */
        Group::Ethernet,
        17,
        "ERROR GMXX_RXX_INT_REG(1,1)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(1, 1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 1),
        1 << 8, /* skperr */
        Group::Ethernet,
        17,
        "ERROR GMXX_RXX_INT_REG(1,1)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(1, 1), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 1),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        17,
        "ERROR GMXX_RXX_INT_REG(1,1)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(1, 1), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 1),
        1 << 20, /* pcterr */
        Group::Ethernet,
        17,
        "ERROR GMXX_RXX_INT_REG(1,1)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 1), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 1),
        1 << 21, /* rsverr */
        Group::Ethernet,
        17,
        "ERROR GMXX_RXX_INT_REG(1,1)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 1), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    // CVMX_GMXX_RXX_INT_REG(2,1)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 1),
        1 << 1, /* carext */
        Group::Ethernet,
        18,
        "ERROR GMXX_RXX_INT_REG(2,1)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(2, 1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 1),
        1 << 8, /* skperr */
        Group::Ethernet,
        18,
        "ERROR GMXX_RXX_INT_REG(2,1)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(2, 1), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 1),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        18,
        "ERROR GMXX_RXX_INT_REG(2,1)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(2, 1), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 1),
        1 << 20, /* pcterr */
        Group::Ethernet,
        18,
        "ERROR GMXX_RXX_INT_REG(2,1)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 1), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 1),
        1 << 21, /* rsverr */
        Group::Ethernet,
        18,
        "ERROR GMXX_RXX_INT_REG(2,1)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 1), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    // CVMX_GMXX_RXX_INT_REG(3,1)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 1),
        1 << 1, /* carext */
        Group::Ethernet,
        19,
        "ERROR GMXX_RXX_INT_REG(3,1)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(3, 1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 1),
        1 << 8, /* skperr */
        Group::Ethernet,
        19,
        "ERROR GMXX_RXX_INT_REG(3,1)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(3, 1), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 1),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        19,
        "ERROR GMXX_RXX_INT_REG(3,1)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(3, 1), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 1),
        1 << 20, /* pcterr */
        Group::Ethernet,
        19,
        "ERROR GMXX_RXX_INT_REG(3,1)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 1), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 1),
        1 << 21, /* rsverr */
        Group::Ethernet,
        19,
        "ERROR GMXX_RXX_INT_REG(3,1)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 1), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    // CVMX_GMXX_TX_INT_REG(1)
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(1),
        1 << 0, /* pko_nxa */
        Group::Ethernet,
        16,
        "ERROR GMXX_TX_INT_REG(1)[PKO_NXA]: PKO request to a non-existent port\n",
    )
    .enable(gmx::tx_int_en(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(1),
        0xf << 2, /* undflw */
        Group::Ethernet,
        16,
        "ERROR GMXX_TX_INT_REG(1)[UNDFLW]: TX underflow, one bit per port\n",
    )
    .enable(gmx::tx_int_en(1), 0xf << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 1 /* gmx1 */)),
    // CVMX_GMXX_BAD_REG(2)
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(2),
        0xffff << 2, /* out_ovr */
        Group::Ethernet,
        32,
        "ERROR GMXX_BAD_REG(2)[OUT_OVR]: Outbound data FIFO overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(2),
        0xf << 22, /* loststat */
        Group::Ethernet,
        32,
        "ERROR GMXX_BAD_REG(2)[LOSTSTAT]: TX statistics counter overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(2),
        1 << 26, /* statovr */
        Group::Ethernet,
        32,
        "ERROR GMXX_BAD_REG(2)[STATOVR]: RX statistics FIFO overflowed\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(2),
        0xf << 27, /* inb_nxa */
        Group::Ethernet,
        32,
        "ERROR GMXX_BAD_REG(2)[INB_NXA]: Inbound port address out of range\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    // CVMX_GMXX_RXX_INT_REG(0,2)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 2),
        1 << 1, /* carext */
        Group::Ethernet,
        32,
        "ERROR GMXX_RXX_INT_REG(0,2)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(0, 2), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 2),
        1 << 8, /* skperr */
        Group::Ethernet,
        32,
        "ERROR GMXX_RXX_INT_REG(0,2)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(0, 2), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 2),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        32,
        "ERROR GMXX_RXX_INT_REG(0,2)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(0, 2), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 2),
        1 << 20, /* pcterr */
        Group::Ethernet,
        32,
        "ERROR GMXX_RXX_INT_REG(0,2)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 2), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 2),
        1 << 21, /* rsverr */
        Group::Ethernet,
        32,
        "ERROR GMXX_RXX_INT_REG(0,2)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 2), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    // CVMX_GMXX_RXX_INT_REG(1,2)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 2),
        1 << 1, /* carext */
        Group::Ethernet,
        33,
        "ERROR GMXX_RXX_INT_REG(1,2)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(1, 2), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 2),
        1 << 8, /* skperr */
        Group::Ethernet,
        33,
        "ERROR GMXX_RXX_INT_REG(1,2)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(1, 2), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 2),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        33,
        "ERROR GMXX_RXX_INT_REG(1,2)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(1, 2), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 2),
        1 << 20, /* pcterr */
        Group::Ethernet,
        33,
        "ERROR GMXX_RXX_INT_REG(1,2)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 2), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 2),
        1 << 21, /* rsverr */
        Group::Ethernet,
        33,
        "ERROR GMXX_RXX_INT_REG(1,2)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 2), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    // CVMX_GMXX_RXX_INT_REG(2,2)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 2),
        1 << 1, /* carext */
        Group::Ethernet,
        34,
        "ERROR GMXX_RXX_INT_REG(2,2)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(2, 2), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 2),
        1 << 8, /* skperr */
        Group::Ethernet,
        34,
        "ERROR GMXX_RXX_INT_REG(2,2)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(2, 2), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 2),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        34,
        "ERROR GMXX_RXX_INT_REG(2,2)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(2, 2), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 2),
        1 << 20, /* pcterr */
        Group::Ethernet,
        34,
        "ERROR GMXX_RXX_INT_REG(2,2)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 2), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 2),
        1 << 21, /* rsverr */
        Group::Ethernet,
        34,
        "ERROR GMXX_RXX_INT_REG(2,2)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 2), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    // CVMX_GMXX_RXX_INT_REG(3,2)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 2),
        1 << 1, /* carext */
        Group::Ethernet,
        35,
        "ERROR GMXX_RXX_INT_REG(3,2)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(3, 2), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 2),
        1 << 8, /* skperr */
        Group::Ethernet,
        35,
        "ERROR GMXX_RXX_INT_REG(3,2)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(3, 2), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 2),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        35,
        "ERROR GMXX_RXX_INT_REG(3,2)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(3, 2), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 2),
        1 << 20, /* pcterr */
        Group::Ethernet,
        35,
        "ERROR GMXX_RXX_INT_REG(3,2)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 2), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 2),
        1 << 21, /* rsverr */
        Group::Ethernet,
        35,
        "ERROR GMXX_RXX_INT_REG(3,2)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 2), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    // CVMX_GMXX_TX_INT_REG(2)
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(2),
        1 << 0, /* pko_nxa */
        Group::Ethernet,
        32,
        "ERROR GMXX_TX_INT_REG(2)[PKO_NXA]: PKO request to a non-existent port\n",
    )
    .enable(gmx::tx_int_en(2), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(2),
        0xf << 2, /* undflw */
        Group::Ethernet,
        32,
        "ERROR GMXX_TX_INT_REG(2)[UNDFLW]: TX underflow, one bit per port\n",
    )
    .enable(gmx::tx_int_en(2), 0xf << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 2 /* gmx2 */)),
    // CVMX_GMXX_BAD_REG(3)
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(3),
        0xffff << 2, /* out_ovr */
        Group::Ethernet,
        48,
        "ERROR GMXX_BAD_REG(3)[OUT_OVR]: Outbound data FIFO overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(3),
        0xf << 22, /* loststat */
        Group::Ethernet,
        48,
        "ERROR GMXX_BAD_REG(3)[LOSTSTAT]: TX statistics counter overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(3),
        1 << 26, /* statovr */
        Group::Ethernet,
        48,
        "ERROR GMXX_BAD_REG(3)[STATOVR]: RX statistics FIFO overflowed\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(3),
        0xf << 27, /* inb_nxa */
        Group::Ethernet,
        48,
        "ERROR GMXX_BAD_REG(3)[INB_NXA]: Inbound port address out of range\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    // CVMX_GMXX_RXX_INT_REG(0,3)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 3),
        1 << 1, /* carext */
        Group::Ethernet,
        48,
        "ERROR GMXX_RXX_INT_REG(0,3)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(0, 3), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 3),
        1 << 8, /* skperr */
        Group::Ethernet,
        48,
        "ERROR GMXX_RXX_INT_REG(0,3)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(0, 3), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 3),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        48,
        "ERROR GMXX_RXX_INT_REG(0,3)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(0, 3), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 3),
        1 << 20, /* pcterr */
        Group::Ethernet,
        48,
        "ERROR GMXX_RXX_INT_REG(0,3)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 3), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 3),
        1 << 21, /* rsverr */
        Group::Ethernet,
        48,
        "ERROR GMXX_RXX_INT_REG(0,3)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 3), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    // CVMX_GMXX_RXX_INT_REG(1,3)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 3),
        1 << 1, /* carext */
        Group::Ethernet,
        49,
        "ERROR GMXX_RXX_INT_REG(1,3)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(1, 3), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 3),
        1 << 8, /* skperr */
        Group::Ethernet,
        49,
        "ERROR GMXX_RXX_INT_REG(1,3)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(1, 3), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 3),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        49,
        "ERROR GMXX_RXX_INT_REG(1,3)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(1, 3), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 3),
        1 << 20, /* pcterr */
        Group::Ethernet,
        49,
        "ERROR GMXX_RXX_INT_REG(1,3)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 3), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 3),
        1 << 21, /* rsverr */
        Group::Ethernet,
        49,
        "ERROR GMXX_RXX_INT_REG(1,3)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 3), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    // CVMX_GMXX_RXX_INT_REG(2,3)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 3),
        1 << 1, /* carext */
        Group::Ethernet,
        50,
        "ERROR GMXX_RXX_INT_REG(2,3)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(2, 3), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 3),
        1 << 8, /* skperr */
        Group::Ethernet,
        50,
        "ERROR GMXX_RXX_INT_REG(2,3)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(2, 3), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 3),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        50,
        "ERROR GMXX_RXX_INT_REG(2,3)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(2, 3), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 3),
        1 << 20, /* pcterr */
        Group::Ethernet,
        50,
        "ERROR GMXX_RXX_INT_REG(2,3)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 3), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 3),
        1 << 21, /* rsverr */
        Group::Ethernet,
        50,
        "ERROR GMXX_RXX_INT_REG(2,3)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 3), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    // CVMX_GMXX_RXX_INT_REG(3,3)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 3),
        1 << 1, /* carext */
        Group::Ethernet,
        51,
        "ERROR GMXX_RXX_INT_REG(3,3)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(3, 3), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 3),
        1 << 8, /* skperr */
        Group::Ethernet,
        51,
        "ERROR GMXX_RXX_INT_REG(3,3)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(3, 3), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 3),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        51,
        "ERROR GMXX_RXX_INT_REG(3,3)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(3, 3), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 3),
        1 << 20, /* pcterr */
        Group::Ethernet,
        51,
        "ERROR GMXX_RXX_INT_REG(3,3)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 3), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 3),
        1 << 21, /* rsverr */
        Group::Ethernet,
        51,
        "ERROR GMXX_RXX_INT_REG(3,3)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 3), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    // CVMX_GMXX_TX_INT_REG(3)
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(3),
        1 << 0, /* pko_nxa */
        Group::Ethernet,
        48,
        "ERROR GMXX_TX_INT_REG(3)[PKO_NXA]: PKO request to a non-existent port\n",
    )
    .enable(gmx::tx_int_en(3), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(3),
        0xf << 2, /* undflw */
        Group::Ethernet,
        48,
        "ERROR GMXX_TX_INT_REG(3)[UNDFLW]: TX underflow, one bit per port\n",
    )
    .enable(gmx::tx_int_en(3), 0xf << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 3 /* gmx3 */)),
    // CVMX_GMXX_BAD_REG(4)
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(4),
        0xffff << 2, /* out_ovr */
        Group::Ethernet,
        64,
        "ERROR GMXX_BAD_REG(4)[OUT_OVR]: Outbound data FIFO overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(4),
        0xf << 22, /* loststat */
        Group::Ethernet,
        64,
        "ERROR GMXX_BAD_REG(4)[LOSTSTAT]: TX statistics counter overflowed, one bit per port\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(4),
        1 << 26, /* statovr */
        Group::Ethernet,
        64,
        "ERROR GMXX_BAD_REG(4)[STATOVR]: RX statistics FIFO overflowed\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::bad_reg(4),
        0xf << 27, /* inb_nxa */
        Group::Ethernet,
        64,
        "ERROR GMXX_BAD_REG(4)[INB_NXA]: Inbound port address out of range\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    // CVMX_GMXX_RXX_INT_REG(0,4)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 4),
        1 << 1, /* carext */
        Group::Ethernet,
        64,
        "ERROR GMXX_RXX_INT_REG(0,4)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(0, 4), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 4),
        1 << 8, /* skperr */
        Group::Ethernet,
        64,
        "ERROR GMXX_RXX_INT_REG(0,4)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(0, 4), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 4),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        64,
        "ERROR GMXX_RXX_INT_REG(0,4)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(0, 4), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 4),
        1 << 20, /* pcterr */
        Group::Ethernet,
        64,
        "ERROR GMXX_RXX_INT_REG(0,4)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 4), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(0, 4),
        1 << 21, /* rsverr */
        Group::Ethernet,
        64,
        "ERROR GMXX_RXX_INT_REG(0,4)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(0, 4), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    // CVMX_GMXX_RXX_INT_REG(1,4)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 4),
        1 << 1, /* carext */
        Group::Ethernet,
        65,
        "ERROR GMXX_RXX_INT_REG(1,4)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(1, 4), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 4),
        1 << 8, /* skperr */
        Group::Ethernet,
        65,
        "ERROR GMXX_RXX_INT_REG(1,4)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(1, 4), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 4),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        65,
        "ERROR GMXX_RXX_INT_REG(1,4)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(1, 4), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 4),
        1 << 20, /* pcterr */
        Group::Ethernet,
        65,
        "ERROR GMXX_RXX_INT_REG(1,4)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 4), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(1, 4),
        1 << 21, /* rsverr */
        Group::Ethernet,
        65,
        "ERROR GMXX_RXX_INT_REG(1,4)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(1, 4), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    // CVMX_GMXX_RXX_INT_REG(2,4)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 4),
        1 << 1, /* carext */
        Group::Ethernet,
        66,
        "ERROR GMXX_RXX_INT_REG(2,4)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(2, 4), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 4),
        1 << 8, /* skperr */
        Group::Ethernet,
        66,
        "ERROR GMXX_RXX_INT_REG(2,4)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(2, 4), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 4),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        66,
        "ERROR GMXX_RXX_INT_REG(2,4)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(2, 4), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 4),
        1 << 20, /* pcterr */
        Group::Ethernet,
        66,
        "ERROR GMXX_RXX_INT_REG(2,4)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 4), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(2, 4),
        1 << 21, /* rsverr */
        Group::Ethernet,
        66,
        "ERROR GMXX_RXX_INT_REG(2,4)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(2, 4), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    // CVMX_GMXX_RXX_INT_REG(3,4)
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 4),
        1 << 1, /* carext */
        Group::Ethernet,
        67,
        "ERROR GMXX_RXX_INT_REG(3,4)[CAREXT]: Carrier extend error\n",
    )
    .enable(gmx::rxx_int_en(3, 4), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 4),
        1 << 8, /* skperr */
        Group::Ethernet,
        67,
        "ERROR GMXX_RXX_INT_REG(3,4)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(gmx::rxx_int_en(3, 4), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 4),
        1 << 10, /* ovrerr */
        Group::Ethernet,
        67,
        "ERROR GMXX_RXX_INT_REG(3,4)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(gmx::rxx_int_en(3, 4), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 4),
        1 << 20, /* pcterr */
        Group::Ethernet,
        67,
        "ERROR GMXX_RXX_INT_REG(3,4)[PCTERR]: Bad control character in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 4), 1 << 20)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::rxx_int_reg(3, 4),
        1 << 21, /* rsverr */
        Group::Ethernet,
        67,
        "ERROR GMXX_RXX_INT_REG(3,4)[RSVERR]: Reserved opcode in a received frame\n",
    )
    .enable(gmx::rxx_int_en(3, 4), 1 << 21)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    // CVMX_GMXX_TX_INT_REG(4)
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(4),
        1 << 0, /* pko_nxa */
        Group::Ethernet,
        64,
        "ERROR GMXX_TX_INT_REG(4)[PKO_NXA]: PKO request to a non-existent port\n",
    )
    .enable(gmx::tx_int_en(4), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    ErrorInfo::bit(
        Io64,
        gmx::tx_int_reg(4),
        0xf << 2, /* undflw */
        Group::Ethernet,
        64,
        "ERROR GMXX_TX_INT_REG(4)[UNDFLW]: TX underflow, one bit per port\n",
    )
    .enable(gmx::tx_int_en(4), 0xf << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 4 /* gmx4 */)),
    // CVMX_MIXX_ISR(0)
    ErrorInfo::bit(
        Io64,
        mix::isr(0),
        1 << 0, /* odblovf */
        Group::MgmtPort,
        0,
        "ERROR MIXX_ISR(0)[ODBLOVF]: Outbound doorbell count overflowed\n",
    )
    .enable(mix::intena(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 12 /* mix0 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(0),
        1 << 1, /* idblovf */
        Group::MgmtPort,
        0,
        "ERROR MIXX_ISR(0)[IDBLOVF]: Inbound doorbell count overflowed\n",
    )
    .enable(mix::intena(0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 12 /* mix0 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(0),
        1 << 4, /* data_drp */
        Group::MgmtPort,
        0,
        "ERROR MIXX_ISR(0)[DATA_DRP]: Inbound packet dropped, no ring buffer was available\n",
    )
    .enable(mix::intena(0), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 12 /* mix0 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(0),
        1 << 5, /* irun */
        Group::MgmtPort,
        0,
        "ERROR MIXX_ISR(0)[IRUN]: Inbound DMA ran out of buffers mid-packet\n",
    )
    .enable(mix::intena(0), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 12 /* mix0 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(0),
        1 << 6, /* orun */
        Group::MgmtPort,
        0,
        "ERROR MIXX_ISR(0)[ORUN]: Outbound DMA overran the transmit FIFO\n",
    )
    .enable(mix::intena(0), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 12 /* mix0 */)),
    // CVMX_MIXX_ISR(1)
    ErrorInfo::bit(
        Io64,
        mix::isr(1),
        1 << 0, /* odblovf */
        Group::MgmtPort,
        1,
        "ERROR MIXX_ISR(1)[ODBLOVF]: Outbound doorbell count overflowed\n",
    )
    .enable(mix::intena(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 13 /* mix1 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(1),
        1 << 1, /* idblovf */
        Group::MgmtPort,
        1,
        "ERROR MIXX_ISR(1)[IDBLOVF]: Inbound doorbell count overflowed\n",
    )
    .enable(mix::intena(1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 13 /* mix1 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(1),
        1 << 4, /* data_drp */
        Group::MgmtPort,
        1,
        "ERROR MIXX_ISR(1)[DATA_DRP]: Inbound packet dropped, no ring buffer was available\n",
    )
    .enable(mix::intena(1), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 13 /* mix1 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(1),
        1 << 5, /* irun */
        Group::MgmtPort,
        1,
        "ERROR MIXX_ISR(1)[IRUN]: Inbound DMA ran out of buffers mid-packet\n",
    )
    .enable(mix::intena(1), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 13 /* mix1 */)),
    ErrorInfo::bit(
        Io64,
        mix::isr(1),
        1 << 6, /* orun */
        Group::MgmtPort,
        1,
        "ERROR MIXX_ISR(1)[ORUN]: Outbound DMA overran the transmit FIFO\n",
    )
    .enable(mix::intena(1), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 13 /* mix1 */)),
    // CVMX_AGL_GMX_BAD_REG
    ErrorInfo::bit(
        Io64,
        agl::GMX_BAD_REG,
        1 << 2, /* ovrflw0 */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_BAD_REG[OVRFLW0]: RX FIFO overflowed, port 0\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_BAD_REG,
        1 << 3, /* txpop0 */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_BAD_REG[TXPOP0]: TX FIFO popped while empty, port 0\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_BAD_REG,
        1 << 4, /* txpsh0 */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_BAD_REG[TXPSH0]: TX FIFO pushed while full, port 0\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_BAD_REG,
        1 << 6, /* ovrflw1 */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_BAD_REG[OVRFLW1]: RX FIFO overflowed, port 1\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_BAD_REG,
        1 << 7, /* txpop1 */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_BAD_REG[TXPOP1]: TX FIFO popped while empty, port 1\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_BAD_REG,
        1 << 8, /* txpsh1 */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_BAD_REG[TXPSH1]: TX FIFO pushed while full, port 1\n",
    )
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    // CVMX_AGL_GMX_RXX_INT_REG(0)
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 0, /* minerr */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[MINERR]: Frame was shorter than the minimum\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 1, /* carext */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[CAREXT]: Carrier extend error\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 2, /* jabber */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[JABBER]: Frame was longer than the maximum\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 3, /* fcserr */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[FCSERR]: Frame had an FCS error\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 4, /* alnerr */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[ALNERR]: Frame was not an integral number of octets\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 5, /* lenerr */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[LENERR]: Frame length did not match the length field\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 8, /* skperr */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(0),
        1 << 10, /* ovrerr */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_RXX_INT_REG(0)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(agl::gmx_rxx_int_en(0), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    // CVMX_AGL_GMX_RXX_INT_REG(1)
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 0, /* minerr */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[MINERR]: Frame was shorter than the minimum\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 1, /* carext */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[CAREXT]: Carrier extend error\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 2, /* jabber */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[JABBER]: Frame was longer than the maximum\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 3, /* fcserr */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[FCSERR]: Frame had an FCS error\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 4, /* alnerr */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[ALNERR]: Frame was not an integral number of octets\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 5, /* lenerr */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[LENERR]: Frame length did not match the length field\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 8, /* skperr */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[SKPERR]: Skipper memory parity error\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 8)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::gmx_rxx_int_reg(1),
        1 << 10, /* ovrerr */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_RXX_INT_REG(1)[OVRERR]: Internal data aggregation FIFO overflowed\n",
    )
    .enable(agl::gmx_rxx_int_en(1), 1 << 10)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    // CVMX_AGL_GMX_TX_INT_REG
    ErrorInfo::bit(
        Io64,
        agl::GMX_TX_INT_REG,
        1 << 0, /* pko_nxa */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_TX_INT_REG[PKO_NXA]: PKO request to a non-existent port\n",
    )
    .enable(agl::GMX_TX_INT_EN, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_TX_INT_REG,
        1 << 2, /* undflw0 */
        Group::MgmtPort,
        0,
        "ERROR AGL_GMX_TX_INT_REG[UNDFLW0]: TX underflow, port 0\n",
    )
    .enable(agl::GMX_TX_INT_EN, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    ErrorInfo::bit(
        Io64,
        agl::GMX_TX_INT_REG,
        1 << 3, /* undflw1 */
        Group::MgmtPort,
        1,
        "ERROR AGL_GMX_TX_INT_REG[UNDFLW1]: TX underflow, port 1\n",
    )
    .enable(agl::GMX_TX_INT_EN, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 16 /* agl */)),
    // CVMX_ILK_GBL_INT
    ErrorInfo::bit(
        Io64,
        ilk::GBL_INT,
        1 << 0, /* rxf_lnk0_perr */
        Group::Ilk,
        0,
        "ERROR ILK_GBL_INT[RXF_LNK0_PERR]: RX FIFO parity error, link 0\n",
    )
    .enable(ilk::GBL_INT_EN, 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::GBL_INT,
        1 << 1, /* rxf_lnk1_perr */
        Group::Ilk,
        1,
        "ERROR ILK_GBL_INT[RXF_LNK1_PERR]: RX FIFO parity error, link 1\n",
    )
    .enable(ilk::GBL_INT_EN, 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::GBL_INT,
        1 << 2, /* rxf_ctl_perr */
        Group::Ilk,
        0,
        "ERROR ILK_GBL_INT[RXF_CTL_PERR]: RX FIFO control memory parity error\n",
    )
    .enable(ilk::GBL_INT_EN, 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::GBL_INT,
        1 << 3, /* rxf_pop_empty */
        Group::Ilk,
        0,
        "ERROR ILK_GBL_INT[RXF_POP_EMPTY]: RX FIFO popped while empty\n",
    )
    .enable(ilk::GBL_INT_EN, 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::GBL_INT,
        1 << 4, /* rxf_push_full */
        Group::Ilk,
        0,
        "ERROR ILK_GBL_INT[RXF_PUSH_FULL]: RX FIFO pushed while full\n",
    )
    .enable(ilk::GBL_INT_EN, 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_TXX_INT(0)
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(0),
        1 << 0, /* txf_err */
        Group::Ilk,
        0,
        "ERROR ILK_TXX_INT(0)[TXF_ERR]: TX FIFO parity error\n",
    )
    .enable(ilk::txx_int_en(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(0),
        1 << 1, /* bad_seq */
        Group::Ilk,
        0,
        "ERROR ILK_TXX_INT(0)[BAD_SEQ]: Invalid sequence in a control word\n",
    )
    .enable(ilk::txx_int_en(0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(0),
        1 << 2, /* bad_pipe */
        Group::Ilk,
        0,
        "ERROR ILK_TXX_INT(0)[BAD_PIPE]: Transmit on an out-of-range pipe\n",
    )
    .enable(ilk::txx_int_en(0), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(0),
        1 << 3, /* stat_cnt_ovfl */
        Group::Ilk,
        0,
        "ERROR ILK_TXX_INT(0)[STAT_CNT_OVFL]: Statistics counter overflowed\n",
    )
    .enable(ilk::txx_int_en(0), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_TXX_INT(1)
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(1),
        1 << 0, /* txf_err */
        Group::Ilk,
        1,
        "ERROR ILK_TXX_INT(1)[TXF_ERR]: TX FIFO parity error\n",
    )
    .enable(ilk::txx_int_en(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(1),
        1 << 1, /* bad_seq */
        Group::Ilk,
        1,
        "ERROR ILK_TXX_INT(1)[BAD_SEQ]: Invalid sequence in a control word\n",
    )
    .enable(ilk::txx_int_en(1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(1),
        1 << 2, /* bad_pipe */
        Group::Ilk,
        1,
        "ERROR ILK_TXX_INT(1)[BAD_PIPE]: Transmit on an out-of-range pipe\n",
    )
    .enable(ilk::txx_int_en(1), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::txx_int(1),
        1 << 3, /* stat_cnt_ovfl */
        Group::Ilk,
        1,
        "ERROR ILK_TXX_INT(1)[STAT_CNT_OVFL]: Statistics counter overflowed\n",
    )
    .enable(ilk::txx_int_en(1), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_RXX_INT(0)
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(0),
        1 << 0, /* lane_align_fail */
        Group::Ilk,
        0,
        "ERROR ILK_RXX_INT(0)[LANE_ALIGN_FAIL]: Lane alignment failed four consecutive times\n",
    )
    .enable(ilk::rxx_int_en(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(0),
        1 << 1, /* crc24_err */
        Group::Ilk,
        0,
        "ERROR ILK_RXX_INT(0)[CRC24_ERR]: A burst had a CRC24 error\n",
    )
    .enable(ilk::rxx_int_en(0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(0),
        1 << 2, /* pkt_drop_rxf */
        Group::Ilk,
        0,
        "ERROR ILK_RXX_INT(0)[PKT_DROP_RXF]: Packet dropped, RX FIFO was full\n",
    )
    .enable(ilk::rxx_int_en(0), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(0),
        1 << 3, /* pkt_drop_rid */
        Group::Ilk,
        0,
        "ERROR ILK_RXX_INT(0)[PKT_DROP_RID]: Packet dropped, reassembly ID was invalid\n",
    )
    .enable(ilk::rxx_int_en(0), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(0),
        1 << 4, /* stat_cnt_ovfl */
        Group::Ilk,
        0,
        "ERROR ILK_RXX_INT(0)[STAT_CNT_OVFL]: Statistics counter overflowed\n",
    )
    .enable(ilk::rxx_int_en(0), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(0),
        1 << 5, /* lane_bad_word */
        Group::Ilk,
        0,
        "ERROR ILK_RXX_INT(0)[LANE_BAD_WORD]: Invalid 64B/67B codeword received\n",
    )
    .enable(ilk::rxx_int_en(0), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_RXX_INT(1)
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(1),
        1 << 0, /* lane_align_fail */
        Group::Ilk,
        1,
        "ERROR ILK_RXX_INT(1)[LANE_ALIGN_FAIL]: Lane alignment failed four consecutive times\n",
    )
    .enable(ilk::rxx_int_en(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(1),
        1 << 1, /* crc24_err */
        Group::Ilk,
        1,
        "ERROR ILK_RXX_INT(1)[CRC24_ERR]: A burst had a CRC24 error\n",
    )
    .enable(ilk::rxx_int_en(1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(1),
        1 << 2, /* pkt_drop_rxf */
        Group::Ilk,
        1,
        "ERROR ILK_RXX_INT(1)[PKT_DROP_RXF]: Packet dropped, RX FIFO was full\n",
    )
    .enable(ilk::rxx_int_en(1), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(1),
        1 << 3, /* pkt_drop_rid */
        Group::Ilk,
        1,
        "ERROR ILK_RXX_INT(1)[PKT_DROP_RID]: Packet dropped, reassembly ID was invalid\n",
    )
    .enable(ilk::rxx_int_en(1), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(1),
        1 << 4, /* stat_cnt_ovfl */
        Group::Ilk,
        1,
        "ERROR ILK_RXX_INT(1)[STAT_CNT_OVFL]: Statistics counter overflowed\n",
    )
    .enable(ilk::rxx_int_en(1), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::rxx_int(1),
        1 << 5, /* lane_bad_word */
        Group::Ilk,
        1,
        "ERROR ILK_RXX_INT(1)[LANE_BAD_WORD]: Invalid 64B/67B codeword received\n",
    )
    .enable(ilk::rxx_int_en(1), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(0)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 2, /* crc32_err */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(0),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        0,
        "ERROR ILK_LNEX_INT(0)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(0), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(1)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 2, /* crc32_err */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(1),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        1,
        "ERROR ILK_LNEX_INT(1)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(1), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(2)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 2, /* crc32_err */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(2),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        2,
        "ERROR ILK_LNEX_INT(2)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(2), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(3)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 2, /* crc32_err */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(3),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        3,
        "ERROR ILK_LNEX_INT(3)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(3), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(4)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 2, /* crc32_err */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(4),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        4,
        "ERROR ILK_LNEX_INT(4)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(4), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(5)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 2, /* crc32_err */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(5),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        5,
        "ERROR ILK_LNEX_INT(5)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(5), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(6)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 2, /* crc32_err */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(6),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        6,
        "ERROR ILK_LNEX_INT(6)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(6), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    // CVMX_ILK_LNEX_INT(7)
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 0, /* serdes_lock_loss */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[SERDES_LOCK_LOSS]: SerDes lost CDR lock\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 0)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 1, /* bdry_sync_loss */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[BDRY_SYNC_LOSS]: Word boundary sync lost after 16 bad sync headers\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 1)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 2, /* crc32_err */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[CRC32_ERR]: Diagnostic CRC32 error on the lane\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 2)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 3, /* ukwn_cntl_word */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[UKWN_CNTL_WORD]: Unknown framing control word received\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 3)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 4, /* scrm_sync_loss */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[SCRM_SYNC_LOSS]: Scrambler state sync lost\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 4)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 5, /* dskew_fifo_ovfl */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[DSKEW_FIFO_OVFL]: Deskew FIFO overflowed\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 5)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
    ErrorInfo::bit(
        Io64,
        ilk::lnex_int(7),
        1 << 6, /* bad_64b67b */
        Group::Ilk,
        7,
        "ERROR ILK_LNEX_INT(7)[BAD_64B67B]: Invalid 64B/67B word on the lane\n",
    )
    .enable(ilk::lnex_int_en(7), 1 << 6)
    .parent(RegisterRef::io64(ciu2::src_ppx_ip2_pkt(0), 1 << 8 /* ilk */)),
];

/// Registers every CN68XX error source descriptor.
///
/// Rejections do not stop the sweep; the remaining descriptors are still
/// offered so a partially full registry covers as much of the error tree as
/// possible. Returns `Ok(())` only if the whole table was accepted.
pub fn initialize<R: ErrorRegistry + ?Sized>(registry: &mut R) -> Result<(), RegisterError> {
    register_all(registry, ERROR_TABLE)
}
